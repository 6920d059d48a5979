// Binary arithmetic with broadcasting.
//
// Shapes combine as follows:
//   scalar op scalar  -> scalar
//   scalar op vector  -> vector, the scalar repeated to the vector's length
//   vector op vector  -> vector of the shorter length
// Whenever either side is 64-bit the other side is widened first; two
// 32-bit operands stay 32-bit.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::value::Value;

/// Elementwise binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arith {
    Add,
    Sub,
    Mul,
    Div,
    Min,
    Max,
}

impl Arith {
    pub fn symbol(self) -> &'static str {
        match self {
            Arith::Add => "+",
            Arith::Sub => "-",
            Arith::Mul => "*",
            Arith::Div => "/",
            Arith::Min => "min",
            Arith::Max => "max",
        }
    }

    fn apply<T>(self, a: T, b: T) -> T
    where
        T: Copy
            + PartialOrd
            + Add<Output = T>
            + Sub<Output = T>
            + Mul<Output = T>
            + Div<Output = T>,
    {
        match self {
            Arith::Add => a + b,
            Arith::Sub => a - b,
            Arith::Mul => a * b,
            Arith::Div => a / b,
            // Plain comparisons: a NaN on the left yields the right operand.
            Arith::Min => {
                if a < b {
                    a
                } else {
                    b
                }
            }
            Arith::Max => {
                if a > b {
                    a
                } else {
                    b
                }
            }
        }
    }
}

impl fmt::Display for Arith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn widen(v: &[f32]) -> Vec<f64> {
    v.iter().copied().map(f64::from).collect()
}

fn zip_with<T, F>(a: &[T], b: &[T], f: F) -> Vec<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

fn scalar_left<T, F>(s: T, v: &[T], f: F) -> Vec<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    v.iter().map(|&y| f(s, y)).collect()
}

fn scalar_right<T, F>(v: &[T], s: T, f: F) -> Vec<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    v.iter().map(|&x| f(x, s)).collect()
}

/// Combines two values elementwise.
///
/// ```
/// use numex_value::{combine, Arith, Value};
///
/// let v = Value::from(vec![-1.0f32, -3.0, -2.0]);
/// let s = Value::from(10.0);
/// assert_eq!(combine(Arith::Add, &v, &s), Value::Vector64(vec![9.0, 7.0, 8.0]));
/// ```
pub fn combine(op: Arith, lhs: &Value, rhs: &Value) -> Value {
    let f64_op = |a: f64, b: f64| op.apply(a, b);
    let f32_op = |a: f32, b: f32| op.apply(a, b);

    match (lhs, rhs) {
        // scalar, scalar
        (Value::Scalar64(a), Value::Scalar64(b)) => Value::Scalar64(f64_op(*a, *b)),
        (Value::Scalar32(a), Value::Scalar32(b)) => Value::Scalar32(f32_op(*a, *b)),
        (Value::Scalar64(a), Value::Scalar32(b)) => Value::Scalar64(f64_op(*a, f64::from(*b))),
        (Value::Scalar32(a), Value::Scalar64(b)) => Value::Scalar64(f64_op(f64::from(*a), *b)),

        // scalar, vector
        (Value::Scalar64(a), Value::Vector64(b)) => Value::Vector64(scalar_left(*a, b, f64_op)),
        (Value::Scalar32(a), Value::Vector32(b)) => Value::Vector32(scalar_left(*a, b, f32_op)),
        (Value::Scalar64(a), Value::Vector32(b)) => {
            Value::Vector64(scalar_left(*a, &widen(b), f64_op))
        }
        (Value::Scalar32(a), Value::Vector64(b)) => {
            Value::Vector64(scalar_left(f64::from(*a), b, f64_op))
        }

        // vector, scalar
        (Value::Vector64(a), Value::Scalar64(b)) => Value::Vector64(scalar_right(a, *b, f64_op)),
        (Value::Vector32(a), Value::Scalar32(b)) => Value::Vector32(scalar_right(a, *b, f32_op)),
        (Value::Vector32(a), Value::Scalar64(b)) => {
            Value::Vector64(scalar_right(&widen(a), *b, f64_op))
        }
        (Value::Vector64(a), Value::Scalar32(b)) => {
            Value::Vector64(scalar_right(a, f64::from(*b), f64_op))
        }

        // vector, vector
        (Value::Vector64(a), Value::Vector64(b)) => Value::Vector64(zip_with(a, b, f64_op)),
        (Value::Vector32(a), Value::Vector32(b)) => Value::Vector32(zip_with(a, b, f32_op)),
        (Value::Vector64(a), Value::Vector32(b)) => Value::Vector64(zip_with(a, &widen(b), f64_op)),
        (Value::Vector32(a), Value::Vector64(b)) => Value::Vector64(zip_with(&widen(a), b, f64_op)),
    }
}
