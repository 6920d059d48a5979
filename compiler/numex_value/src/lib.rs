//! Runtime values for the numex evaluator.
//!
//! A [`Value`] is one of four numeric shapes: a 64- or 32-bit float scalar,
//! or a vector of either. Binary arithmetic between shapes follows a small
//! promotion lattice (see [`combine`]); unary math always computes in
//! double precision.

pub mod math;
mod ops;
mod reduce;
mod value;

pub use ops::{combine, Arith};
pub use reduce::Aggregate;
pub use value::{Value, Width};
