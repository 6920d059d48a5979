//! Lexer implementation for numex expressions
//! Splits the source into operators, parentheses and buffered words, then
//! classifies each word as a number, a function or a (possibly indexed) name.

use logos::Logos;

use crate::error::LexError;
use crate::function::Function;
use crate::names::{parse_name, NameShape};
use crate::token::{Operator, Token, TokenKind};

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r" +")]
enum RawToken {
    // Letters, digits, '_', '.', '[' and ']' accumulate into one word.
    // Spaces inside the run are dropped, so "a b" reads as "ab".
    #[regex(r"[A-Za-z0-9_.\[\]][A-Za-z0-9_.\[\] ]*", |lex| lex.slice().replace(' ', ""))]
    Word(String),

    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token(",", |_| Operator::Comma)]
    Operator(Operator),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// numex expression lexer
///
/// Yields tokens in source order and stops after the first error.
pub struct Lexer<'source> {
    /// The inner logos lexer
    inner: logos::Lexer<'source, RawToken>,
    /// Set once an error has been reported
    done: bool,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given expression
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: RawToken::lexer(source),
            done: false,
        }
    }

    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.done {
            return None;
        }
        let raw = self.inner.next()?;
        let position = self.inner.span().start;

        let result = match raw {
            Ok(RawToken::Word(word)) => {
                classify(&word, position).map(|kind| Token::new(kind, position))
            }
            Ok(RawToken::Operator(op)) => Ok(Token::new(TokenKind::Operator(op), position)),
            Ok(RawToken::LParen) => Ok(Token::new(TokenKind::LParen, position)),
            Ok(RawToken::RParen) => Ok(Token::new(TokenKind::RParen, position)),
            Err(()) => Err(LexError::UnexpectedChar {
                ch: self.inner.slice().chars().next().unwrap_or_default(),
                position,
            }),
        };

        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Classifies a buffered word. First match wins: number, function, name.
pub(crate) fn classify(word: &str, position: usize) -> Result<TokenKind, LexError> {
    if word.parse::<f64>().is_ok() {
        return Ok(TokenKind::Number(word.to_string()));
    }
    if let Some(function) = Function::from_name(word) {
        return Ok(TokenKind::Function(function));
    }

    let kind = match parse_name(word) {
        Some(NameShape::Plain(name)) => TokenKind::Name(name.to_string()),
        Some(NameShape::Indexed { closed: false, .. }) => {
            return Err(LexError::MissingBracket {
                name: word.to_string(),
                position,
            })
        }
        Some(NameShape::Indexed { base, index, .. }) => match index.parse::<usize>() {
            Ok(index) => TokenKind::SlicedName {
                name: base.to_string(),
                index,
            },
            Err(_) => {
                return Err(LexError::InvalidIndex {
                    index: index.to_string(),
                    position,
                })
            }
        },
        None => {
            return Err(LexError::UnrecognizedToken {
                token: word.to_string(),
                position,
            })
        }
    };

    #[cfg(feature = "logging")]
    log::trace!("classified {word:?} at {position} as {kind:?}");
    Ok(kind)
}

/// Tokenizes a whole expression, failing on the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "logging")]
    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}
