//! Name to value bindings consulted while evaluating an expression.

mod env;

pub use env::{Binding, Env, EnvError};
