use crate::syntax::{BinOp, VarName};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Undefined variable `{0}`")]
    UndefinedVariable(VarName),
    #[error("Cannot assign to `{0}`")]
    InvalidAssignmentTarget(String),
    #[error("Operator `{op}` expects a {expected} but got `{found}`")]
    TypeMismatch { op: BinOp, expected: &'static str, found: String },
    #[error("Divide by zero")]
    DivideByZero,
    #[error("`{0}` is not callable")]
    NotCallable(String),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
