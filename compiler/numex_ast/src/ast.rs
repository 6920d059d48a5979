// Expression tree for numex.
// Leaves are literals and variable references; internal nodes are binary
// operators or single-argument function applications.

use std::fmt;

use numex_lexer::{Function, Operator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operator joining the two children of a [`BinaryNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    /// `,` collects function arguments into a list
    Concat,
}

impl BinaryOperator {
    /// The operator as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Concat => ",",
        }
    }
}

impl From<Operator> for BinaryOperator {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => BinaryOperator::Add,
            Operator::Sub => BinaryOperator::Sub,
            Operator::Mul => BinaryOperator::Mul,
            Operator::Div => BinaryOperator::Div,
            Operator::Comma => BinaryOperator::Concat,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A numeric literal
    Number(f64),
    /// A whole environment entry, `name`
    Variable(String),
    /// One element of a vector entry, `name[index]`
    IndexedVariable { name: String, index: usize },
    Binary(Box<BinaryNode>),
    Call(Box<CallNode>),
}

/// An operator applied to a left and a right operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryNode {
    /// Evaluated first
    pub left: Node,
    pub operator: BinaryOperator,
    pub right: Node,
}

/// A function applied to its argument subtree. Two-argument functions take
/// a `Concat` node as their argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallNode {
    pub function: Function,
    pub argument: Node,
}

impl Node {
    /// Creates a reference to a whole environment entry.
    pub fn variable<S: Into<String>>(name: S) -> Self {
        Node::Variable(name.into())
    }

    /// Creates a reference to one element of a vector entry.
    pub fn indexed<S: Into<String>>(name: S, index: usize) -> Self {
        Node::IndexedVariable {
            name: name.into(),
            index,
        }
    }

    /// Creates a binary operator node.
    pub fn binary(left: Node, operator: BinaryOperator, right: Node) -> Self {
        Node::Binary(Box::new(BinaryNode {
            left,
            operator,
            right,
        }))
    }

    /// Creates a function call on `argument`.
    pub fn call(function: Function, argument: Node) -> Self {
        Node::Call(Box::new(CallNode { function, argument }))
    }

    /// Returns true for literals and variable references.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Number(_) | Node::Variable(_) | Node::IndexedVariable { .. }
        )
    }
}

/// Writes `node` fully parenthesised. With `bare_list`, the `,` nodes at the
/// top of the left spine print without parentheses, as a call's argument
/// list does.
///
/// The left spine is walked with a loop so that long operator chains do not
/// recurse per operator.
fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, bare_list: bool) -> fmt::Result {
    let mut spine: Vec<&BinaryNode> = Vec::new();
    let mut leftmost = node;
    while let Node::Binary(bin) = leftmost {
        spine.push(bin);
        leftmost = &bin.left;
    }
    let bare = if bare_list {
        spine
            .iter()
            .take_while(|bin| bin.operator == BinaryOperator::Concat)
            .count()
    } else {
        0
    };

    for _ in bare..spine.len() {
        f.write_str("(")?;
    }
    match leftmost {
        Node::Number(value) => write!(f, "{value}")?,
        Node::Variable(name) => f.write_str(name)?,
        Node::IndexedVariable { name, index } => write!(f, "{name}[{index}]")?,
        Node::Call(call) => {
            write!(f, "{}(", call.function)?;
            write_node(f, &call.argument, true)?;
            f.write_str(")")?;
        }
        Node::Binary(_) => {}
    }
    for (level, bin) in spine.iter().enumerate().rev() {
        match bin.operator {
            BinaryOperator::Concat => write!(f, ", {}", bin.right)?,
            op => write!(f, " {op} {}", bin.right)?,
        }
        if level >= bare {
            f.write_str(")")?;
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    /// Renders a fully parenthesised infix form that parses back to the same
    /// tree. A `,` list prints bare only as the direct argument of a call.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, false)
    }
}
