use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Floating point width of a value's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    F32,
    F64,
}

/// A numeric value produced or consumed by evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Scalar64(f64),
    Scalar32(f32),
    Vector64(Vec<f64>),
    Vector32(Vec<f32>),
}

impl Value {
    pub fn width(&self) -> Width {
        match self {
            Value::Scalar64(_) | Value::Vector64(_) => Width::F64,
            Value::Scalar32(_) | Value::Vector32(_) => Width::F32,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar64(_) | Value::Scalar32(_))
    }

    /// Number of elements; scalars count as one.
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar64(_) | Value::Scalar32(_) => 1,
            Value::Vector64(v) => v.len(),
            Value::Vector32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rust-style name of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar64(_) => "f64",
            Value::Scalar32(_) => "f32",
            Value::Vector64(_) => "Vec<f64>",
            Value::Vector32(_) => "Vec<f32>",
        }
    }

    /// The scalar as an `f64`, or `None` for vectors.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Scalar64(x) => Some(*x),
            Value::Scalar32(x) => Some(f64::from(*x)),
            Value::Vector64(_) | Value::Vector32(_) => None,
        }
    }

    /// Element `index` of a vector, keeping its width. Scalars have no
    /// elements to index.
    pub fn element(&self, index: usize) -> Option<Value> {
        match self {
            Value::Vector64(v) => v.get(index).copied().map(Value::Scalar64),
            Value::Vector32(v) => v.get(index).copied().map(Value::Scalar32),
            Value::Scalar64(_) | Value::Scalar32(_) => None,
        }
    }

    /// Every element widened to `f64`, in order.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Value::Scalar64(x) => vec![*x],
            Value::Scalar32(x) => vec![f64::from(*x)],
            Value::Vector64(v) => v.clone(),
            Value::Vector32(v) => v.iter().copied().map(f64::from).collect(),
        }
    }

    /// Applies `f` to every element in double precision. The result is
    /// always 64-bit and keeps the scalar/vector shape.
    pub fn map_f64<F: Fn(f64) -> f64>(&self, f: F) -> Value {
        match self {
            Value::Scalar64(x) => Value::Scalar64(f(*x)),
            Value::Scalar32(x) => Value::Scalar64(f(f64::from(*x))),
            Value::Vector64(v) => Value::Vector64(v.iter().map(|&x| f(x)).collect()),
            Value::Vector32(v) => Value::Vector64(v.iter().map(|&x| f(f64::from(x))).collect()),
        }
    }

    /// Absolute value; the only elementwise function that keeps 32-bit input
    /// 32-bit.
    pub fn abs(&self) -> Value {
        match self {
            Value::Scalar64(x) => Value::Scalar64(x.abs()),
            Value::Scalar32(x) => Value::Scalar32(x.abs()),
            Value::Vector64(v) => Value::Vector64(v.iter().map(|x| x.abs()).collect()),
            Value::Vector32(v) => Value::Vector32(v.iter().map(|x| x.abs()).collect()),
        }
    }

    /// Sum of the elements at the input's width. Scalars are returned as is.
    pub fn sum(&self) -> Value {
        match self {
            Value::Scalar64(_) | Value::Scalar32(_) => self.clone(),
            Value::Vector64(v) => Value::Scalar64(v.iter().sum()),
            Value::Vector32(v) => Value::Scalar32(v.iter().sum()),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar64(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Scalar32(x)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Vector64(v)
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::Vector32(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Vector64(v.to_vec())
    }
}

impl From<&[f32]> for Value {
    fn from(v: &[f32]) -> Self {
        Value::Vector32(v.to_vec())
    }
}

fn write_elements<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar64(x) => write!(f, "{x}"),
            Value::Scalar32(x) => write!(f, "{x}"),
            Value::Vector64(v) => write_elements(f, v),
            Value::Vector32(v) => write_elements(f, v),
        }
    }
}
