use crate::*;
use pretty_assertions::assert_eq;
use quill_dynamics::EvalError;
use std::path::Path;

fn shown(prog: ProgKont) -> String {
    match prog {
        | ProgKont::Ret(value) => value.to_string(),
        | ProgKont::Halt => format!("<halt>"),
    }
}

#[test]
fn conf_fills_in_defaults() {
    let conf = Conf::from_toml("budget = 16").unwrap();
    assert_eq!(conf, Conf { budget: 16, ..Conf::default() });
    assert_eq!(Conf::from_toml("").unwrap(), Conf::default());
    assert!(matches!(Conf::from_toml("budget = \"many\""), Err(DriverError::ConfError(_))));
}

#[test]
fn conf_prints_back() {
    let conf = Conf { echo_ast: true, ..Conf::default() };
    let text = conf.to_toml().unwrap();
    assert!(text.contains("budget = 200"));
    assert_eq!(Conf::from_toml(&text).unwrap(), conf);
}

#[test]
fn definitions_persist_between_runs() {
    let mut interp = Interpreter::default();
    let mut out = Vec::new();
    interp.run_source(None, "sum = lambda(x, y) x + y;", &mut out).unwrap();
    let prog = interp.run_source(None, "print(sum(2, 3)); sum(2, 3)", &mut out).unwrap();
    assert_eq!(shown(prog), "5");
    assert_eq!(String::from_utf8(out).unwrap(), "5\n");
    assert!(interp.env.names().contains(&"sum".into()));
}

#[test]
fn budget_comes_from_conf() {
    let mut interp = Interpreter::new(Conf { budget: 1, ..Conf::default() });
    let src = "fib = λ(n) if n < 2 then n else fib(n - 1) + fib(n - 2); fib(15)";
    let prog = interp.run_source(None, src, &mut std::io::sink()).unwrap();
    assert_eq!(shown(prog), "610");
}

#[test]
fn json_trees_run() {
    let text = r#"{
        "type": "call",
        "func": { "type": "var", "value": "print" },
        "args": [{ "type": "str", "value": "hi" }, { "type": "num", "value": 1.5 }]
    }"#;
    let mut interp = Interpreter::default();
    let mut out = Vec::new();
    let prog = interp.run_json(text, &mut out).unwrap();
    assert_eq!(shown(prog), "false");
    assert_eq!(String::from_utf8(out).unwrap(), "hi 1.5\n");
}

#[test]
fn input_kind_follows_extension_or_flag() {
    let tree = r#"{ "type": "num", "value": 7 }"#;
    let mut interp = Interpreter::default();
    let mut sink = std::io::sink();
    let prog = interp.run_text(Path::new("tree.json"), tree, false, &mut sink).unwrap();
    assert_eq!(shown(prog), "7");
    let prog = interp.run_text(Path::new("tree.txt"), tree, true, &mut sink).unwrap();
    assert_eq!(shown(prog), "7");
    let err = interp.run_text(Path::new("tree.ql"), tree, false, &mut sink).unwrap_err();
    assert!(matches!(err, DriverError::ParseError(_)));
}

#[test]
fn errors_keep_their_layer() {
    let mut interp = Interpreter::default();
    let mut sink = std::io::sink();
    let err = interp.run_source(Some("bad.ql".into()), "x = ;", &mut sink).unwrap_err();
    match err {
        | DriverError::ParseError(err) => assert!(err.to_string().ends_with("(bad.ql:1:5)")),
        | other => panic!("expected a parse error, got {:?}", other),
    }
    let err = interp.run_source(None, "nope", &mut sink).unwrap_err();
    assert!(matches!(err, DriverError::EvalError(EvalError::UndefinedVariable(_))));
    let err = interp.run_json(r#"{ "type": "while" }"#, &mut sink).unwrap_err();
    assert!(matches!(err, DriverError::AstError(_)));
}

#[test]
fn halt_is_reported() {
    let mut interp = Interpreter::default();
    let prog = interp.run_source(None, "halt(); 1", &mut std::io::sink()).unwrap();
    assert_eq!(shown(prog), "<halt>");
}
