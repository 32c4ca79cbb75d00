use crate::err::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// how many steps may nest on the native stack before it is unwound
    pub budget: usize,
    /// print the final value of `quill run`
    pub print_result: bool,
    /// log every parsed program at debug level
    pub echo_ast: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf { budget: quill_dynamics::DEFAULT_BUDGET, print_result: true, echo_ast: false }
    }
}

impl Conf {
    pub const FILE_NAME: &'static str = "quill.toml";

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
    /// Read `path` if given, else `quill.toml` in the working directory if
    /// there is one, else fall back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            | Some(path) => path,
            | None if Path::new(Self::FILE_NAME).is_file() => Path::new(Self::FILE_NAME),
            | None => {
                log::info!("Using default configuration; no `{}` found.", Self::FILE_NAME);
                return Ok(Conf::default());
            }
        };
        log::debug!("Loading configuration from `{}`.", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
