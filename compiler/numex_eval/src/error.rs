use thiserror::Error;

/// Errors raised while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Reported the same way whether the environment is absent or just lacks
    /// the key.
    #[error("Cannot evaluate expression. Key '{name}' not found in environment")]
    KeyNotFound { name: String },

    #[error("Unsupported data type '{type_name}' for token '{name}'")]
    UnsupportedType {
        type_name: &'static str,
        name: String,
    },

    #[error("Index {index} out of range for '{name}' of length {len}")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    #[error("invalid operation: {lhs} {op} {rhs}")]
    TypeMismatch {
        lhs: &'static str,
        op: &'static str,
        rhs: &'static str,
    },

    #[error("'{function}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    /// A `,` list that never reached a function
    #[error("argument list used outside of a function call")]
    UnexpectedArguments,
}
