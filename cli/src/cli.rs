use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a quill program
    Run {
        /// Path to the file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Read the file as a JSON syntax tree
        #[arg(long, default_value_t = false)]
        ast: bool,
        /// Steps allowed on the native stack before it is unwound
        #[arg(long)]
        budget: Option<usize>,
        /// Configuration file (defaults to `quill.toml` if present)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Start a REPL
    Repl {
        /// Steps allowed on the native stack before it is unwound
        #[arg(long)]
        budget: Option<usize>,
        /// Configuration file (defaults to `quill.toml` if present)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Print the effective configuration
    Config {
        /// Configuration file (defaults to `quill.toml` if present)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}
