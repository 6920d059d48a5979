//! Errors reported while tokenizing.

use thiserror::Error;

/// Errors raised while turning an expression string into tokens.
///
/// Every variant carries the byte offset it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside every recognised class
    #[error("found unexpected char '{ch}' at index {position}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Byte offset of the character
        position: usize,
    },

    /// A buffered run that is neither a number, a function nor a name
    #[error("unrecognized token '{token}' at position {position}")]
    UnrecognizedToken {
        /// The buffered text
        token: String,
        /// Byte offset of the first buffered character
        position: usize,
    },

    /// `name[idx` without the closing bracket
    #[error("Unbalanced expression: missing ']' at position {position}")]
    MissingBracket {
        /// The whole buffered name
        name: String,
        /// Byte offset of the name
        position: usize,
    },

    /// `name[idx]` where `idx` is not a non-negative integer
    #[error("Invalid slice index '{index}' at position {position}")]
    InvalidIndex {
        /// Text found between the brackets
        index: String,
        /// Byte offset of the name
        position: usize,
    },
}

impl LexError {
    /// Byte offset the error points at.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::UnrecognizedToken { position, .. }
            | LexError::MissingBracket { position, .. }
            | LexError::InvalidIndex { position, .. } => *position,
        }
    }
}
