//! Token types produced by the lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the byte offset it starts at, and
//! [`Operator`] carries the precedence table the parser uses.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::function::Function;

/// Single-character infix operators, including the `,` argument separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `,` joins function arguments into a list
    Comma,
}

impl Operator {
    /// Maps a source character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            ',' => Some(Operator::Comma),
            _ => None,
        }
    }

    /// Binding strength used by the shunting-yard parser.
    ///
    /// `,` binds loosest so that `f(a + b, c)` keeps `a + b` together as
    /// one argument.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Comma => 0,
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// The source symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Comma => ",",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The classified payload of a token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A numeric literal, kept as written
    Number(String),
    /// One of `+ - * / ,`
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A plain variable reference
    Name(String),
    /// A variable reference with a constant element index, `name[index]`
    SlicedName {
        /// The variable name in front of the brackets
        name: String,
        /// The element index between the brackets
        index: usize,
    },
    /// A recognised built-in function name
    Function(Function),
}

/// A token together with the byte offset of its first character.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// 0-based byte offset in the source expression
    pub position: usize,
}

impl Token {
    /// Creates a token at the given position.
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Returns true for tokens that become tree leaves.
    pub fn is_operand(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Number(_) | TokenKind::Name(_) | TokenKind::SlicedName { .. }
        )
    }

    /// Returns true for `(` and `)`.
    pub fn is_paren(&self) -> bool {
        matches!(self.kind, TokenKind::LParen | TokenKind::RParen)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(text) => f.write_str(text),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Name(name) => f.write_str(name),
            TokenKind::SlicedName { name, index } => write!(f, "{name}[{index}]"),
            TokenKind::Function(function) => f.write_str(function.name()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_levels() {
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert!(Operator::Div.precedence() > Operator::Add.precedence());
        assert!(Operator::Comma.precedence() < Operator::Sub.precedence());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Operator::from_char(','), Some(Operator::Comma));
        assert_eq!(Operator::from_char('^'), None);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(
            TokenKind::SlicedName {
                name: "aa".to_string(),
                index: 2,
            },
            4,
        );
        assert_eq!(token.to_string(), "aa[2]@4");
        assert!(token.is_operand());
        assert!(!token.is_paren());
    }
}
