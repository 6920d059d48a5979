pub mod parser;

pub use parser::{
    parse_expression, parse_expression_with, parse_tokens, render_snippet, ParseError,
    ParseOptions,
};


// Integration tests are in the tests/ directory
