use std::any::Any;

use numex_eval::EvalError;
use numex_parser::ParseError;
use thiserror::Error;

/// Any failure surfaced by [`compile`](crate::compile), [`run`](crate::run)
/// or [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Evaluate(#[from] EvalError),

    /// A panic caught at the public boundary
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Byte offset in the source for tokenize and parse errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Parse(err) => err.position(),
            Error::Evaluate(_) | Error::Internal { .. } => None,
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Error::Internal { message }
    }
}
