//! numex lexical analyzer
//!
//! Turns an expression string such as `2 * cos(x[1]) + y` into a flat
//! sequence of [`Token`]s for the shunting-yard parser.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod function;
pub mod lexer;
mod names;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use function::Function;
pub use lexer::{tokenize, Lexer};
pub use token::{Operator, Token, TokenKind};
