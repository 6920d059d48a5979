//! numex: parse arithmetic expressions once, evaluate them many times
//! against scalar and vector bindings.
//!
//! ```
//! use numex::{compile, run, Env, Value};
//!
//! let expr = compile("add(X, Y) * 2").unwrap();
//! let env = Env::new()
//!     .with("X", vec![-1.0, 3.0, -2.0])
//!     .with("Y", vec![0.0, -1.0, 1.0]);
//! assert_eq!(run(&expr, Some(&env)).unwrap(), Value::Vector64(vec![-2.0, 4.0, -2.0]));
//! ```
//!
//! [`compile`], [`run`] and [`evaluate`] never panic: failures in any
//! stage, including unexpected panics, come back as an [`Error`].

mod error;

use std::collections::BTreeSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::debug;

pub use error::Error;
pub use numex_ast::{pretty_print, AstPrinter, Node};
pub use numex_env::{Binding, Env, EnvError};
pub use numex_eval::EvalError;
pub use numex_lexer::{Function, LexError};
pub use numex_parser::{render_snippet, ParseError, ParseOptions};
pub use numex_value::{Value, Width};

/// A compiled expression: the parsed tree together with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    tree: Node,
}

impl Expression {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn into_tree(self) -> Node {
        self.tree
    }

    /// Names the expression reads from the environment, sorted.
    pub fn variables(&self) -> BTreeSet<String> {
        self.tree.referenced_variables()
    }

    /// The indented one-node-per-line rendering of the tree.
    pub fn pretty(&self) -> String {
        pretty_print(&self.tree)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}

fn contain<T>(f: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| Err(Error::from_panic(payload)))
}

/// Parses `source` with the default [`ParseOptions`].
pub fn compile(source: &str) -> Result<Expression, Error> {
    compile_with(source, &ParseOptions::default())
}

pub fn compile_with(source: &str, options: &ParseOptions) -> Result<Expression, Error> {
    contain(|| {
        let tree = numex_parser::parse_expression_with(source, options)?;
        debug!("compiled {source:?}");
        Ok(Expression {
            source: source.to_string(),
            tree,
        })
    })
}

/// Evaluates a compiled expression. Variables are looked up in `env`; with
/// no environment every variable reference fails.
pub fn run(expression: &Expression, env: Option<&Env>) -> Result<Value, Error> {
    contain(|| Ok(numex_eval::evaluate(&expression.tree, env)?))
}

/// [`compile`] followed by [`run`].
pub fn evaluate(source: &str, env: Option<&Env>) -> Result<Value, Error> {
    let expression = compile(source)?;
    run(&expression, env)
}
