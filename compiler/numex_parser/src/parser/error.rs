use numex_lexer::LexError;
use thiserror::Error;

/// Errors produced while turning a token stream into a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The expression could not be tokenized
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Nothing to parse
    #[error("empty expression")]
    EmptyExpression,

    /// A `(` or `)` without its partner. When the stream ends with open
    /// parentheses the position is that of the last token.
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    /// An operator or function with fewer operands than it needs
    #[error("missing operand for '{symbol}' at position {position}")]
    MissingOperand {
        symbol: &'static str,
        position: usize,
    },

    /// Operands left over once the tree is complete, e.g. `(1)(2)`
    #[error("unexpected operand at position {position}")]
    DanglingOperand { position: usize },

    /// A number token that does not parse as `f64`
    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    /// Parentheses, calls or right-hand operands nested past
    /// [`ParseOptions::max_nesting`](crate::ParseOptions::max_nesting)
    #[error("expression nesting exceeds {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },

    /// A root-to-leaf path longer than
    /// [`ParseOptions::max_depth`](crate::ParseOptions::max_depth)
    #[error("expression tree exceeds {limit} levels at position {position}")]
    TreeTooDeep { limit: usize, position: usize },
}

impl ParseError {
    /// Byte offset the error points at, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lex(err) => Some(err.position()),
            ParseError::EmptyExpression => None,
            ParseError::UnbalancedParenthesis { position }
            | ParseError::MissingOperand { position, .. }
            | ParseError::DanglingOperand { position }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::NestingTooDeep { position, .. }
            | ParseError::TreeTooDeep { position, .. } => Some(*position),
        }
    }
}
