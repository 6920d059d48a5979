//! The closed set of built-in functions.
//!
//! Names are resolved once, while tokenizing, through a process-wide table;
//! later stages only ever see the [`Function`] enum.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! builtin_functions {
    ($($variant:ident => $name:literal,)*) => {
        /// A built-in function callable as `name(...)`.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum Function {
            $($variant,)*
        }

        const FUNCTION_TABLE: &[(&str, Function)] = &[
            $(($name, Function::$variant),)*
        ];

        impl Function {
            /// The name the function is spelled with in expressions.
            pub fn name(self) -> &'static str {
                match self {
                    $(Function::$variant => $name,)*
                }
            }
        }
    };
}

builtin_functions! {
    Add => "add",
    Sub => "sub",
    Mul => "mul",
    Div => "div",
    Min => "min",
    Max => "max",
    Sum => "sum",
    Abs => "abs",
    Acos => "acos",
    Acosh => "acosh",
    Asin => "asin",
    Asinh => "asinh",
    Atan => "atan",
    Atanh => "atanh",
    Cbrt => "cbrt",
    Ceil => "ceil",
    Cos => "cos",
    Cosh => "cosh",
    Erf => "erf",
    Erfc => "erfc",
    Erfcinv => "erfcinv",
    Erfinv => "erfinv",
    Exp => "exp",
    Exp2 => "exp2",
    Expm1 => "expm1",
    Floor => "floor",
    Gamma => "gamma",
    J0 => "j0",
    J1 => "j1",
    Log => "log",
    Log10 => "log10",
    Log1p => "log1p",
    Log2 => "log2",
    Logb => "logb",
    Round => "round",
    RoundToEven => "roundToEven",
    Sin => "sin",
    Sinh => "sinh",
    Sqrt => "sqrt",
    Tan => "tan",
    Tanh => "tanh",
    Trunc => "trunc",
    Y0 => "y0",
    Y1 => "y1",
    NanMin => "nanmin",
    NanMax => "nanmax",
    NanMean => "nanmean",
    NanStd => "nanstd",
    NanSum => "nansum",
    NanProd => "nanprod",
}

lazy_static! {
    static ref FUNCTIONS_BY_NAME: HashMap<&'static str, Function> =
        FUNCTION_TABLE.iter().copied().collect();
}

impl Function {
    /// Looks up a function by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS_BY_NAME.get(name).copied()
    }

    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Function::Add
            | Function::Sub
            | Function::Mul
            | Function::Div
            | Function::Min
            | Function::Max => 2,
            _ => 1,
        }
    }

    /// Returns true for functions that reduce a vector to a scalar.
    pub fn is_reduction(self) -> bool {
        matches!(
            self,
            Function::Sum
                | Function::NanMin
                | Function::NanMax
                | Function::NanMean
                | Function::NanStd
                | Function::NanSum
                | Function::NanProd
        )
    }

    /// Iterates over every built-in function.
    pub fn all() -> impl Iterator<Item = Function> {
        FUNCTION_TABLE.iter().map(|(_, function)| *function)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
