use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] quill_surface::ParseError),
    #[error("{0}")]
    AstError(#[from] quill_syntax::AstError),
    #[error("{0}")]
    EvalError(#[from] quill_dynamics::EvalError),
    #[error("Invalid configuration: {0}")]
    ConfError(#[from] toml::de::Error),
    #[error("Cannot print configuration: {0}")]
    ConfPrintError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, DriverError>;
