use clap::Parser;
use quill_cli::{Cli, Commands, Repl, init_logger, load_conf, print_conf, report, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let res = match Cli::parse().command {
        | Commands::Run { file, ast, budget, config, verbose } => {
            init_logger(verbose);
            run(file, ast, budget, config)
        }
        | Commands::Repl { budget, config, verbose } => {
            init_logger(verbose);
            match load_conf(config.as_deref(), budget) {
                | Ok(conf) => Repl::new(conf).launch().map_err(|err| report(&err.into(), None)),
                | Err(err) => Err(report(&err, None)),
            }
        }
        | Commands::Config { config } => {
            init_logger(false);
            print_conf(config)
        }
    };
    match res {
        | Ok(()) => ExitCode::SUCCESS,
        | Err(()) => ExitCode::FAILURE,
    }
}
