use crate::ast::{BinaryNode, CallNode, Node};
use crate::visit::{Visitable, Visitor};

const STEP: &str = "  ";

/// Renders a tree one node per line, children indented two spaces deeper
/// than their parent.
///
/// ```text
/// add
///   ,
///     1
///     2
/// ```
#[derive(Default)]
pub struct AstPrinter {
    indent: String,
    output: String,
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a printer whose every line starts with `indent`.
    pub fn with_indent<S: Into<String>>(indent: S) -> Self {
        Self {
            indent: indent.into(),
            output: String::new(),
        }
    }

    /// Prints a tree to a string.
    pub fn print(mut self, node: &Node) -> String {
        node.accept(&mut self);
        self.output
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(&self.indent);
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn indent(&mut self) {
        self.indent.push_str(STEP);
    }

    fn dedent(&mut self) {
        self.indent.truncate(self.indent.len() - STEP.len());
    }
}

impl Visitor for AstPrinter {
    fn visit_number(&mut self, value: f64) {
        self.line(&value.to_string());
    }

    fn visit_variable(&mut self, name: &str) {
        self.line(name);
    }

    fn visit_indexed_variable(&mut self, name: &str, index: usize) {
        self.line(&format!("{name}[{index}]"));
    }

    fn enter_binary(&mut self, node: &BinaryNode) {
        self.line(node.operator.symbol());
        self.indent();
    }

    fn leave_binary(&mut self, _node: &BinaryNode) {
        self.dedent();
    }

    fn enter_call(&mut self, node: &CallNode) {
        self.line(node.function.name());
        self.indent();
    }

    fn leave_call(&mut self, _node: &CallNode) {
        self.dedent();
    }
}
