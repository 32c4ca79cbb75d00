use clap::Parser;
use pretty_assertions::assert_eq;
use quill_cli::{Cli, Commands, Repl, load_conf, repl::Control};
use quill_driver::{Conf, DriverError};
use std::path::PathBuf;

fn session(lines: &[&str]) -> String {
    let mut repl = Repl::new(Conf::default());
    let mut out = Vec::new();
    for line in lines {
        match repl.handle(line, &mut out).unwrap() {
            | Control::Continue => {}
            | Control::Quit => break,
        }
    }
    String::from_utf8(out).unwrap()
}

fn program(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../lang/tests/programs").join(name)
}

#[test]
fn repl_keeps_definitions() {
    let out = session(&["sum = lambda(x, y) x + y", "sum(2, 3)", "\"a\" ", "", ":quit", "sum(1, 1)"]);
    assert_eq!(out, "<lambda>\n5\n\"a\"\n");
}

#[test]
fn repl_lists_the_global_scope() {
    let out = session(&["x = \"hi\"", ":env"]);
    let expected = [
        "\"hi\"",
        "CallCC = <primitive CallCC>",
        "halt = <primitive halt>",
        "print = <primitive print>",
        "println = <primitive println>",
        "x = \"hi\"",
    ];
    assert_eq!(out.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn repl_prints_syntax_trees() {
    assert_eq!(session(&[":ast 1 + 2 * 3"]), "(1 + (2 * 3))\n");
    assert_eq!(session(&[":ast a = 1; b"]), "{ a = 1; b }\n");
    assert!(session(&[":nope"]).starts_with("unknown command"));
}

#[test]
fn repl_survives_errors() {
    let mut repl = Repl::new(Conf::default());
    let mut out = Vec::new();
    assert!(matches!(repl.handle("nope", &mut out), Err(DriverError::EvalError(_))));
    assert!(matches!(repl.handle("x = ", &mut out), Err(DriverError::ParseError(_))));
    assert!(matches!(repl.handle("halt()", &mut out), Ok(Control::Continue)));
    assert_eq!(String::from_utf8(out).unwrap(), "halted\n");
}

#[test]
fn parses_run_arguments() {
    let cli = Cli::try_parse_from(["quill", "run", "prog.ql", "--budget", "5", "-v"]).unwrap();
    match cli.command {
        | Commands::Run { file, ast, budget, config, verbose } => {
            assert_eq!(file, PathBuf::from("prog.ql"));
            assert_eq!((ast, budget, config, verbose), (false, Some(5), None, true));
        }
        | _ => panic!("expected the run command"),
    }
    assert!(Cli::try_parse_from(["quill", "run"]).is_err());
}

#[test]
fn budget_flag_overrides_the_file() {
    let path = std::env::temp_dir().join(format!("quill-conf-{}.toml", std::process::id()));
    std::fs::write(&path, "budget = 7\nprint_result = false\n").unwrap();
    let conf = load_conf(Some(&path), None).unwrap();
    assert_eq!(conf, Conf { budget: 7, print_result: false, echo_ast: false });
    assert_eq!(load_conf(Some(&path), Some(3)).unwrap().budget, 3);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(load_conf(Some(&path), None), Err(DriverError::IoError(_))));
}

#[test]
fn binary_runs_programs() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_quill"))
        .args(["run", "--budget", "10"])
        .arg(program("0-sum.ql"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "5\n5\n42\nfalse\n");
}

#[test]
fn binary_fails_on_bad_programs() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_quill"))
        .arg("run")
        .arg(program("e4-syntax.ql"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
