//! Special functions not provided as `f64` methods.
//!
//! The error function family and Gamma come from `statrs`; Bessel functions
//! and the binary exponent come from `libm`.

use statrs::function::{erf as statrs_erf, gamma as statrs_gamma};

pub fn erf(x: f64) -> f64 {
    statrs_erf::erf(x)
}

pub fn erfc(x: f64) -> f64 {
    statrs_erf::erfc(x)
}

/// Inverse of [`erf`]. Defined on `[-1, 1]`, NaN elsewhere.
pub fn erfinv(x: f64) -> f64 {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    statrs_erf::erf_inv(x)
}

/// Inverse of [`erfc`]. Defined on `[0, 2]`, NaN elsewhere.
pub fn erfcinv(x: f64) -> f64 {
    if x.is_nan() || !(0.0..=2.0).contains(&x) {
        return f64::NAN;
    }
    statrs_erf::erfc_inv(x)
}

/// Gamma function. Poles at zero keep the sign of the zero; negative
/// integers and -inf give NaN.
pub fn gamma(x: f64) -> f64 {
    if x == 0.0 {
        return f64::INFINITY.copysign(x);
    }
    if x == f64::NEG_INFINITY || (x < 0.0 && x.fract() == 0.0) {
        return f64::NAN;
    }
    statrs_gamma::gamma(x)
}

pub fn j0(x: f64) -> f64 {
    libm::j0(x)
}

pub fn j1(x: f64) -> f64 {
    libm::j1(x)
}

pub fn y0(x: f64) -> f64 {
    libm::y0(x)
}

pub fn y1(x: f64) -> f64 {
    libm::y1(x)
}

/// Binary exponent of `x`: `logb(8) = 3`, `logb(0.1) = -4`.
pub fn logb(x: f64) -> f64 {
    if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() {
        x
    } else {
        f64::from(libm::ilogb(x))
    }
}

/// Rounds half-way cases to the nearest even integer.
pub fn round_to_even(x: f64) -> f64 {
    x.round_ties_even()
}
