use ariadne::{Label, Report, ReportKind};
use quill_syntax::AstError;
use quill_utils::span::{FileInfo, Span};
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("Can't handle character `{0}`")]
    InvalidToken(String),
    #[error("Unexpected token `{found}`; expecting {expected}")]
    UnrecognizedToken { found: String, expected: String },
    #[error("Unexpected end of input; expecting {expected}")]
    UnrecognizedEof { expected: String },
    #[error("Invalid number literal `{0}`")]
    InvalidNumber(String),
    #[error("{0}")]
    Ast(#[from] AstError),
}

/// A syntax error together with where it happened.
#[derive(Debug)]
pub struct ParseError {
    pub error: SyntaxError,
    pub span: Span,
    pub file_info: FileInfo,
}

impl ParseError {
    /// Create an Ariadne report for this parse error.
    pub fn to_report(&self) -> Report<'static, (String, std::ops::Range<usize>)> {
        let ParseError { error, span, file_info: info } = self;
        let name = info.display_name();
        let message = match error {
            | SyntaxError::InvalidToken(_) => format!("Invalid token"),
            | SyntaxError::UnrecognizedToken { found, .. } => {
                format!("Unrecognized token `{}`", found)
            }
            | SyntaxError::UnrecognizedEof { .. } => format!("Unrecognized EOF"),
            | SyntaxError::InvalidNumber(_) => format!("Invalid number"),
            | SyntaxError::Ast(_) => format!("Malformed expression"),
        };
        Report::build(ReportKind::Error, name.clone(), span.start())
            .with_message(message)
            .with_label(
                Label::new((name, span.range()))
                    .with_message(format!("{} at {}", error, span.locate(info))),
            )
            .finish()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ParseError { error, span, file_info: info } = self;
        write!(f, "{} ({}:{})", error, info.display_name(), info.trans_span2(span.start()))
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
