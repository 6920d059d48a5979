//! Expression tree (AST) for the numex expression language.
//!
//! This crate defines the tree built by `numex_parser`, along with a
//! visitor for traversing it and a printer for snapshot-style dumps.

pub mod ast;
pub mod printer;
pub mod visit;

// Re-export commonly used types
pub use ast::{BinaryNode, BinaryOperator, CallNode, Node};
pub use printer::AstPrinter;

/// Renders `node` in the indented one-node-per-line format.
pub fn pretty_print(node: &Node) -> String {
    AstPrinter::new().print(node)
}

#[cfg(feature = "serde")]
mod json {
    use serde::{Deserialize, Serialize};
    use std::error::Error;

    /// A result type for AST serialisation.
    pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

    /// Serializes a tree to a JSON string.
    ///
    /// # Example
    ///
    /// ```
    /// use numex_ast::{to_json, Node};
    ///
    /// let json = to_json(&Node::Number(42.0)).unwrap();
    /// assert!(json.contains("Number"));
    /// ```
    pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// Deserializes a tree from a JSON string.
    pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(feature = "serde")]
pub use json::{from_json, to_json, Result};
