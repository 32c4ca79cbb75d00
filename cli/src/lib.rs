pub mod cli;
pub mod repl;

pub use cli::*;
pub use repl::Repl;

use ariadne::Source;
use colored::Colorize;
use quill_driver::{Conf, DriverError, Interpreter, Result};
use quill_dynamics::ProgKont;
use std::path::{Path, PathBuf};

/// `--verbose` raises the default filter to debug; `RUST_LOG` still wins.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Load the configuration, letting `--budget` override the file.
pub fn load_conf(config: Option<&Path>, budget: Option<usize>) -> Result<Conf> {
    let mut conf = Conf::load(config)?;
    if let Some(budget) = budget {
        conf.budget = budget;
    }
    log::debug!("{:?}", conf);
    Ok(conf)
}

/// Print an error to stderr; parse errors are drawn against their source.
pub fn report(err: &DriverError, src: Option<&str>) {
    if let (DriverError::ParseError(err), Some(src)) = (err, src) {
        let name = err.file_info.display_name();
        if err.to_report().eprint((name, Source::from(src.to_string()))).is_ok() {
            return;
        }
    }
    eprintln!("{}: {}", "error".red().bold(), err);
}

/// `quill run`: the program's own output goes to stdout, followed by its
/// final value unless the configuration says otherwise.
pub fn run(
    file: PathBuf, ast: bool, budget: Option<usize>, config: Option<PathBuf>,
) -> std::result::Result<(), ()> {
    let conf = load_conf(config.as_deref(), budget).map_err(|err| report(&err, None))?;
    let text = std::fs::read_to_string(&file).map_err(|err| report(&err.into(), None))?;
    let mut interp = Interpreter::new(conf);
    match interp.run_text(&file, &text, ast, &mut std::io::stdout()) {
        | Ok(ProgKont::Ret(value)) => {
            if interp.conf.print_result {
                println!("{}", value);
            }
            Ok(())
        }
        | Ok(ProgKont::Halt) => {
            log::info!("{}", "halted".yellow());
            Ok(())
        }
        | Err(err) => {
            report(&err, Some(&text));
            Err(())
        }
    }
}

/// `quill config`
pub fn print_conf(config: Option<PathBuf>) -> std::result::Result<(), ()> {
    let conf = load_conf(config.as_deref(), None).map_err(|err| report(&err, None))?;
    let text = conf.to_toml().map_err(|err| report(&err, None))?;
    print!("{}", text);
    Ok(())
}
