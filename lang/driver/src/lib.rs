//! The run pipeline of the quill language: configuration, parsing, and a
//! global scope that outlives single runs.

pub mod conf;
pub mod err;

pub use conf::Conf;
pub use err::*;

use quill_dynamics::{Env, ProgKont, Runtime, builtin::link_builtin};
use quill_syntax::{Formatter, RcExpr, Ugly, json::from_json};
use std::{io::Write, path::{Path, PathBuf}};

pub struct Interpreter {
    /// configuration
    pub conf: Conf,
    /// the global scope, with the builtins linked
    pub env: Env,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Conf::default())
    }
}

impl Interpreter {
    pub fn new(conf: Conf) -> Self {
        let env = Env::global();
        link_builtin(&env);
        Interpreter { conf, env }
    }
    /// Parse source text; `path` only names the input in error positions.
    pub fn parse(&self, path: Option<PathBuf>, src: &str) -> Result<RcExpr> {
        let expr = quill_surface::parse(src, path)?;
        if self.conf.echo_ast {
            log::debug!("parsed: {}", expr.ugly(&Formatter::new()));
        }
        Ok(expr)
    }
    pub fn run_source(
        &mut self, path: Option<PathBuf>, src: &str, out: &mut dyn Write,
    ) -> Result<ProgKont> {
        let expr = self.parse(path, src)?;
        self.run_ast(&expr, out)
    }
    pub fn run_json(&mut self, text: &str, out: &mut dyn Write) -> Result<ProgKont> {
        let expr = from_json(text)?;
        if self.conf.echo_ast {
            log::debug!("loaded: {}", expr.ugly(&Formatter::new()));
        }
        self.run_ast(&expr, out)
    }
    pub fn run_ast(&mut self, expr: &RcExpr, out: &mut dyn Write) -> Result<ProgKont> {
        let mut runtime = Runtime::with_budget(out, self.conf.budget);
        let prog = runtime.run(expr, &self.env)?;
        out.flush()?;
        Ok(prog)
    }
    /// Run `text` read from `path`: as a JSON tree when `ast` is set or the
    /// path ends in `.json`, as source text otherwise.
    pub fn run_text(
        &mut self, path: &Path, text: &str, ast: bool, out: &mut dyn Write,
    ) -> Result<ProgKont> {
        let json = ast || path.extension().is_some_and(|ext| ext == "json");
        if json {
            self.run_json(text, out)
        } else {
            self.run_source(Some(path.to_path_buf()), text, out)
        }
    }
    pub fn run_file(&mut self, path: &Path, out: &mut dyn Write) -> Result<ProgKont> {
        let text = std::fs::read_to_string(path)?;
        self.run_text(path, &text, false, out)
    }
}

#[cfg(test)]
mod tests;
