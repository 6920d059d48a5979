use numex_lexer::Function;
use numex_value::{math, Aggregate, Arith, Value};

/// How a built-in function is carried out on its evaluated argument.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Kernel {
    /// Takes a two-element argument list
    Binary(Arith),
    Unary(Unary),
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Unary {
    Sum,
    Abs,
    Reduce(Aggregate),
    /// Elementwise in double precision
    Map(fn(f64) -> f64),
}

impl Unary {
    pub(crate) fn apply(self, value: &Value) -> Value {
        match self {
            Unary::Sum => value.sum(),
            Unary::Abs => value.abs(),
            Unary::Reduce(aggregate) => aggregate.reduce(value),
            Unary::Map(f) => value.map_f64(f),
        }
    }
}

pub(crate) fn kernel(function: Function) -> Kernel {
    use Function::*;

    match function {
        Add => Kernel::Binary(Arith::Add),
        Sub => Kernel::Binary(Arith::Sub),
        Mul => Kernel::Binary(Arith::Mul),
        Div => Kernel::Binary(Arith::Div),
        Min => Kernel::Binary(Arith::Min),
        Max => Kernel::Binary(Arith::Max),

        Sum => Kernel::Unary(Unary::Sum),
        Abs => Kernel::Unary(Unary::Abs),
        NanMin => Kernel::Unary(Unary::Reduce(Aggregate::NanMin)),
        NanMax => Kernel::Unary(Unary::Reduce(Aggregate::NanMax)),
        NanMean => Kernel::Unary(Unary::Reduce(Aggregate::NanMean)),
        NanStd => Kernel::Unary(Unary::Reduce(Aggregate::NanStd)),
        NanSum => Kernel::Unary(Unary::Reduce(Aggregate::NanSum)),
        NanProd => Kernel::Unary(Unary::Reduce(Aggregate::NanProd)),

        Acos => Kernel::Unary(Unary::Map(f64::acos)),
        Acosh => Kernel::Unary(Unary::Map(f64::acosh)),
        Asin => Kernel::Unary(Unary::Map(f64::asin)),
        Asinh => Kernel::Unary(Unary::Map(f64::asinh)),
        Atan => Kernel::Unary(Unary::Map(f64::atan)),
        Atanh => Kernel::Unary(Unary::Map(f64::atanh)),
        Cbrt => Kernel::Unary(Unary::Map(f64::cbrt)),
        Ceil => Kernel::Unary(Unary::Map(f64::ceil)),
        Cos => Kernel::Unary(Unary::Map(f64::cos)),
        Cosh => Kernel::Unary(Unary::Map(f64::cosh)),
        Erf => Kernel::Unary(Unary::Map(math::erf)),
        Erfc => Kernel::Unary(Unary::Map(math::erfc)),
        Erfcinv => Kernel::Unary(Unary::Map(math::erfcinv)),
        Erfinv => Kernel::Unary(Unary::Map(math::erfinv)),
        Exp => Kernel::Unary(Unary::Map(f64::exp)),
        Exp2 => Kernel::Unary(Unary::Map(f64::exp2)),
        Expm1 => Kernel::Unary(Unary::Map(f64::exp_m1)),
        Floor => Kernel::Unary(Unary::Map(f64::floor)),
        Gamma => Kernel::Unary(Unary::Map(math::gamma)),
        J0 => Kernel::Unary(Unary::Map(math::j0)),
        J1 => Kernel::Unary(Unary::Map(math::j1)),
        Log => Kernel::Unary(Unary::Map(f64::ln)),
        Log10 => Kernel::Unary(Unary::Map(f64::log10)),
        Log1p => Kernel::Unary(Unary::Map(f64::ln_1p)),
        Log2 => Kernel::Unary(Unary::Map(f64::log2)),
        Logb => Kernel::Unary(Unary::Map(math::logb)),
        Round => Kernel::Unary(Unary::Map(f64::round)),
        RoundToEven => Kernel::Unary(Unary::Map(math::round_to_even)),
        Sin => Kernel::Unary(Unary::Map(f64::sin)),
        Sinh => Kernel::Unary(Unary::Map(f64::sinh)),
        Sqrt => Kernel::Unary(Unary::Map(f64::sqrt)),
        Tan => Kernel::Unary(Unary::Map(f64::tan)),
        Tanh => Kernel::Unary(Unary::Map(f64::tanh)),
        Trunc => Kernel::Unary(Unary::Map(f64::trunc)),
        Y0 => Kernel::Unary(Unary::Map(math::y0)),
        Y1 => Kernel::Unary(Unary::Map(math::y1)),
    }
}
