use thiserror::Error;

/// Defects in a tree handed to the evaluator by a front end or loader.
#[derive(Error, Debug)]
pub enum AstError {
    #[error("Unknown operator `{0}`")]
    UnknownOperator(String),
    #[error("Unknown node kind")]
    UnknownNodeKind,
    #[error("Malformed AST: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AstError>;
