//! Evaluates numex expression trees against an environment.

mod dispatch;
mod error;
mod eval;

pub use error::EvalError;
pub use eval::{evaluate, Evaluator};
