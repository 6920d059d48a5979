// Parser implementation for numex using the shunting-yard algorithm.
// Infix tokens are reordered into postfix with an explicit operator stack,
// then the postfix queue is folded into a tree bottom-up.

mod diagnostics;
mod error;

pub use diagnostics::render_snippet;
pub use error::ParseError;

use log::{debug, trace};
use numex_ast::{BinaryOperator, Node};
use numex_lexer::{tokenize, Token, TokenKind};

/// Limits applied while building the tree.
///
/// Nesting counts the levels opened by parentheses, function calls and
/// right-hand operands. The left operand of a binary operator stays on its
/// parent's level, so `1 + 2 + ... + n` nests two levels however long it is.
/// Evaluation recurses once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest nesting accepted.
    pub max_nesting: usize,
    /// Longest root-to-leaf path accepted, counted in nodes. Long operator
    /// chains grow this one level per operator.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: 512,
            max_depth: 4096,
        }
    }
}

impl ParseOptions {
    /// Sets the deepest nesting accepted.
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Sets the longest root-to-leaf path accepted.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Tokenizes and parses `source` with the default options.
///
/// # Examples
///
/// ```
/// use numex_ast::pretty_print;
/// use numex_parser::parse_expression;
///
/// let tree = parse_expression("2 + 3 * 4").unwrap();
/// assert_eq!(pretty_print(&tree), "+\n  2\n  *\n    3\n    4\n");
/// ```
pub fn parse_expression(source: &str) -> Result<Node, ParseError> {
    parse_expression_with(source, &ParseOptions::default())
}

/// Tokenizes and parses `source`, enforcing the limits in `options`.
pub fn parse_expression_with(source: &str, options: &ParseOptions) -> Result<Node, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens, options)
}

/// Parses an already tokenized expression.
pub fn parse_tokens(tokens: &[Token], options: &ParseOptions) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let postfix = to_postfix(tokens)?;
    if log::log_enabled!(log::Level::Debug) {
        let rendered: Vec<String> = postfix.iter().map(|t| t.kind.to_string()).collect();
        debug!("postfix: {}", rendered.join(" "));
    }
    build_tree(&postfix, options)
}

/// Reorders infix tokens into postfix order.
///
/// Operators are left-associative: an incoming operator first pops every
/// stacked operator of equal or higher precedence. Functions wait on the
/// stack until the `)` closing their argument list.
fn to_postfix(tokens: &[Token]) -> Result<Vec<&Token>, ParseError> {
    let mut output: Vec<&Token> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<&Token> = Vec::new();

    for token in tokens {
        match &token.kind {
            TokenKind::Number(_) | TokenKind::Name(_) | TokenKind::SlicedName { .. } => {
                output.push(token)
            }
            TokenKind::Operator(op) => {
                while let Some(top) = operators.last().copied() {
                    match &top.kind {
                        TokenKind::Operator(top_op) if top_op.precedence() >= op.precedence() => {
                            operators.pop();
                            output.push(top);
                        }
                        _ => break,
                    }
                }
                operators.push(token);
            }
            TokenKind::Function(_) | TokenKind::LParen => operators.push(token),
            TokenKind::RParen => {
                loop {
                    match operators.pop() {
                        Some(top) if top.kind == TokenKind::LParen => break,
                        Some(top) => output.push(top),
                        None => {
                            return Err(ParseError::UnbalancedParenthesis {
                                position: token.position,
                            })
                        }
                    }
                }
                if let Some(top) = operators.last().copied() {
                    if matches!(top.kind, TokenKind::Function(_)) {
                        operators.pop();
                        output.push(top);
                    }
                }
            }
        }
    }

    // The reported position is the last token's, not the unmatched paren's.
    let last_position = tokens.last().map_or(0, |token| token.position);
    while let Some(top) = operators.pop() {
        if top.is_paren() {
            return Err(ParseError::UnbalancedParenthesis {
                position: last_position,
            });
        }
        output.push(top);
    }
    Ok(output)
}

/// A finished subtree waiting on the build stack.
struct Pending {
    node: Node,
    nesting: usize,
    depth: usize,
    position: usize,
}

impl Pending {
    fn leaf(node: Node, position: usize) -> Self {
        Self {
            node,
            nesting: 1,
            depth: 1,
            position,
        }
    }
}

fn pop_operand(
    stack: &mut Vec<Pending>,
    symbol: &'static str,
    position: usize,
) -> Result<Pending, ParseError> {
    stack
        .pop()
        .ok_or(ParseError::MissingOperand { symbol, position })
}

/// Folds a postfix queue into a tree.
fn build_tree(postfix: &[&Token], options: &ParseOptions) -> Result<Node, ParseError> {
    let mut stack: Vec<Pending> = Vec::new();

    for token in postfix {
        let position = token.position;
        let pending = match &token.kind {
            TokenKind::Number(text) => {
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.clone(),
                    position,
                })?;
                Pending::leaf(Node::Number(value), position)
            }
            TokenKind::Name(name) => Pending::leaf(Node::variable(name.as_str()), position),
            TokenKind::SlicedName { name, index } => {
                Pending::leaf(Node::indexed(name.as_str(), *index), position)
            }
            TokenKind::Function(function) => {
                let argument = pop_operand(&mut stack, function.name(), position)?;
                Pending {
                    node: Node::call(*function, argument.node),
                    nesting: argument.nesting + 1,
                    depth: argument.depth + 1,
                    position,
                }
            }
            TokenKind::Operator(op) => {
                // First pop is the right operand.
                let right = pop_operand(&mut stack, op.symbol(), position)?;
                let left = pop_operand(&mut stack, op.symbol(), position)?;
                Pending {
                    nesting: left.nesting.max(right.nesting + 1),
                    depth: left.depth.max(right.depth) + 1,
                    node: Node::binary(left.node, BinaryOperator::from(*op), right.node),
                    position,
                }
            }
            // to_postfix never queues parentheses
            TokenKind::LParen | TokenKind::RParen => {
                return Err(ParseError::UnbalancedParenthesis { position })
            }
        };

        if pending.nesting > options.max_nesting {
            return Err(ParseError::NestingTooDeep {
                limit: options.max_nesting,
                position,
            });
        }
        if pending.depth > options.max_depth {
            return Err(ParseError::TreeTooDeep {
                limit: options.max_depth,
                position,
            });
        }
        stack.push(pending);
    }

    let mut remaining = stack.into_iter();
    let root = remaining.next().ok_or(ParseError::EmptyExpression)?;
    if let Some(extra) = remaining.next() {
        return Err(ParseError::DanglingOperand {
            position: extra.position,
        });
    }
    trace!(
        "built tree of depth {} nesting {}",
        root.depth,
        root.nesting
    );
    Ok(root.node)
}
