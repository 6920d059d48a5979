// Tree-walking evaluator.
// Children are evaluated before their parent, left before right. The `,`
// operator produces an argument list rather than a value; only a function
// call may consume one.

use log::{debug, trace};
use numex_ast::{BinaryNode, BinaryOperator, CallNode, Node};
use numex_env::{Binding, Env};
use numex_value::{combine, Arith, Value};

use crate::dispatch::{kernel, Kernel};
use crate::error::EvalError;

/// Intermediate result of a subtree.
#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Value(Value),
    Args(Vec<Value>),
}

impl Operand {
    fn type_name(&self) -> &'static str {
        match self {
            Operand::Value(value) => value.type_name(),
            Operand::Args(_) => "argument list",
        }
    }

    fn into_args(self) -> Vec<Value> {
        match self {
            Operand::Value(value) => vec![value],
            Operand::Args(values) => values,
        }
    }
}

/// Evaluates trees against an optional, borrowed environment.
///
/// Evaluation never mutates the tree or the environment, so one compiled
/// tree can be evaluated concurrently against different environments.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'env> {
    env: Option<&'env Env>,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: Option<&'env Env>) -> Self {
        Self { env }
    }

    pub fn evaluate(&self, node: &Node) -> Result<Value, EvalError> {
        match self.eval(node)? {
            Operand::Value(value) => {
                debug!("evaluated {node} to {}", value.type_name());
                Ok(value)
            }
            Operand::Args(_) => Err(EvalError::UnexpectedArguments),
        }
    }

    fn eval(&self, node: &Node) -> Result<Operand, EvalError> {
        match node {
            Node::Number(x) => Ok(Operand::Value(Value::Scalar64(*x))),
            Node::Variable(name) => self.variable(name).map(Operand::Value),
            Node::IndexedVariable { name, index } => {
                self.indexed_variable(name, *index).map(Operand::Value)
            }
            Node::Binary(binary) => self.binary(binary),
            Node::Call(call) => self.call(call).map(Operand::Value),
        }
    }

    fn lookup(&self, name: &str) -> Result<&'env Binding, EvalError> {
        self.env
            .and_then(|env| env.get(name))
            .ok_or_else(|| EvalError::KeyNotFound {
                name: name.to_string(),
            })
    }

    fn variable(&self, name: &str) -> Result<Value, EvalError> {
        match self.lookup(name)? {
            Binding::Value(value) => Ok(value.clone()),
            other => Err(EvalError::UnsupportedType {
                type_name: other.type_name(),
                name: name.to_string(),
            }),
        }
    }

    fn indexed_variable(&self, name: &str, index: usize) -> Result<Value, EvalError> {
        match self.lookup(name)? {
            Binding::Value(value) if !value.is_scalar() => {
                value
                    .element(index)
                    .ok_or_else(|| EvalError::IndexOutOfRange {
                        name: name.to_string(),
                        index,
                        len: value.len(),
                    })
            }
            other => Err(EvalError::UnsupportedType {
                type_name: other.type_name(),
                name: name.to_string(),
            }),
        }
    }

    /// Evaluates a chain of binary operators. The left spine is walked
    /// with a loop so that `1 + 2 + ... + n` does not recurse per operator.
    fn binary(&self, node: &BinaryNode) -> Result<Operand, EvalError> {
        let mut spine = vec![node];
        let mut leftmost = &node.left;
        while let Node::Binary(inner) = leftmost {
            spine.push(inner.as_ref());
            leftmost = &inner.left;
        }

        let mut acc = self.eval(leftmost)?;
        for binary in spine.into_iter().rev() {
            let right = self.eval(&binary.right)?;
            acc = apply(binary.operator, acc, right)?;
        }
        Ok(acc)
    }

    fn call(&self, node: &CallNode) -> Result<Value, EvalError> {
        let function = node.function;
        let argument = self.eval(&node.argument)?;
        trace!(
            "{function}({}){}",
            argument.type_name(),
            if function.is_reduction() { " reduces" } else { "" }
        );

        match kernel(function) {
            Kernel::Binary(arith) => {
                let args = argument.into_args();
                match args.as_slice() {
                    [lhs, rhs] => Ok(combine(arith, lhs, rhs)),
                    _ => Err(EvalError::ArityMismatch {
                        function: function.name(),
                        expected: function.arity(),
                        found: args.len(),
                    }),
                }
            }
            Kernel::Unary(unary) => match argument {
                Operand::Value(value) => Ok(unary.apply(&value)),
                Operand::Args(args) => Err(EvalError::ArityMismatch {
                    function: function.name(),
                    expected: function.arity(),
                    found: args.len(),
                }),
            },
        }
    }
}

fn apply(operator: BinaryOperator, left: Operand, right: Operand) -> Result<Operand, EvalError> {
    let arith = match operator {
        BinaryOperator::Add => Arith::Add,
        BinaryOperator::Sub => Arith::Sub,
        BinaryOperator::Mul => Arith::Mul,
        BinaryOperator::Div => Arith::Div,
        BinaryOperator::Concat => {
            let mut args = left.into_args();
            args.extend(right.into_args());
            return Ok(Operand::Args(args));
        }
    };

    match (left, right) {
        (Operand::Value(lhs), Operand::Value(rhs)) => {
            trace!("{} {} {}", lhs.type_name(), arith, rhs.type_name());
            Ok(Operand::Value(combine(arith, &lhs, &rhs)))
        }
        (left, right) => Err(EvalError::TypeMismatch {
            lhs: left.type_name(),
            op: operator.symbol(),
            rhs: right.type_name(),
        }),
    }
}

/// Evaluates `node` against `env`.
///
/// Without an environment any variable reference fails with
/// [`EvalError::KeyNotFound`].
pub fn evaluate(node: &Node, env: Option<&Env>) -> Result<Value, EvalError> {
    Evaluator::new(env).evaluate(node)
}
