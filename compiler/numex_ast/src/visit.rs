//! Visitor pattern implementation for traversing the expression tree.
//!
//! Implement [`Visitor`] and override the callbacks you care about. Nodes
//! are visited in source order: a binary node is entered, then its left and
//! right operands are visited, then it is left. [`walk`] keeps its own stack,
//! so long operator chains do not recurse.

use std::collections::BTreeSet;

use crate::ast::*;

/// A visitor for traversing the tree.
pub trait Visitor {
    fn visit_number(&mut self, _value: f64) {}

    fn visit_variable(&mut self, _name: &str) {}

    fn visit_indexed_variable(&mut self, _name: &str, _index: usize) {}

    /// Called before either operand of `node` is visited.
    fn enter_binary(&mut self, _node: &BinaryNode) {}

    /// Called once both operands of `node` have been visited.
    fn leave_binary(&mut self, _node: &BinaryNode) {}

    fn enter_call(&mut self, _node: &CallNode) {}

    fn leave_call(&mut self, _node: &CallNode) {}
}

/// A type that can be visited by a [`Visitor`].
pub trait Visitable {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

impl Visitable for Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        walk(visitor, self);
    }
}

enum Step<'a> {
    Visit(&'a Node),
    LeaveBinary(&'a BinaryNode),
    LeaveCall(&'a CallNode),
}

/// Visits every node under `root`, depth first, left before right.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, root: &Node) {
    let mut steps = vec![Step::Visit(root)];
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Node::Number(value)) => visitor.visit_number(*value),
            Step::Visit(Node::Variable(name)) => visitor.visit_variable(name),
            Step::Visit(Node::IndexedVariable { name, index }) => {
                visitor.visit_indexed_variable(name, *index)
            }
            Step::Visit(Node::Binary(bin)) => {
                visitor.enter_binary(bin);
                steps.push(Step::LeaveBinary(bin));
                steps.push(Step::Visit(&bin.right));
                steps.push(Step::Visit(&bin.left));
            }
            Step::Visit(Node::Call(call)) => {
                visitor.enter_call(call);
                steps.push(Step::LeaveCall(call));
                steps.push(Step::Visit(&call.argument));
            }
            Step::LeaveBinary(bin) => visitor.leave_binary(bin),
            Step::LeaveCall(call) => visitor.leave_call(call),
        }
    }
}

#[derive(Default)]
struct VariableCollector {
    names: BTreeSet<String>,
}

impl Visitor for VariableCollector {
    fn visit_variable(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    fn visit_indexed_variable(&mut self, name: &str, _index: usize) {
        self.names.insert(name.to_string());
    }
}

#[derive(Default)]
struct DepthMeter {
    current: usize,
    max: usize,
}

impl DepthMeter {
    fn enter(&mut self) {
        self.current += 1;
        self.max = self.max.max(self.current);
    }

    fn leave(&mut self) {
        self.current -= 1;
    }

    fn leaf(&mut self) {
        self.enter();
        self.leave();
    }
}

impl Visitor for DepthMeter {
    fn visit_number(&mut self, _value: f64) {
        self.leaf();
    }

    fn visit_variable(&mut self, _name: &str) {
        self.leaf();
    }

    fn visit_indexed_variable(&mut self, _name: &str, _index: usize) {
        self.leaf();
    }

    fn enter_binary(&mut self, _node: &BinaryNode) {
        self.enter();
    }

    fn leave_binary(&mut self, _node: &BinaryNode) {
        self.leave();
    }

    fn enter_call(&mut self, _node: &CallNode) {
        self.enter();
    }

    fn leave_call(&mut self, _node: &CallNode) {
        self.leave();
    }
}

impl Node {
    /// Names of every environment entry the expression reads, sorted.
    pub fn referenced_variables(&self) -> BTreeSet<String> {
        let mut collector = VariableCollector::default();
        self.accept(&mut collector);
        collector.names
    }

    /// Number of nodes on the longest root-to-leaf path (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut meter = DepthMeter::default();
        self.accept(&mut meter);
        meter.max
    }
}
