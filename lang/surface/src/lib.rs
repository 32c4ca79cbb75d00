#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod textual {
    /// Logos-based lexer and token definitions.
    pub mod lexer;
    pub use lexer::*;
    /// Recursive-descent parser producing `quill_syntax::Expr`.
    pub mod parser;
    pub use parser::*;
    /// Parse error formatting.
    pub mod err;
    pub use err::*;
}

pub use textual::{parse, ParseError, SyntaxError};
