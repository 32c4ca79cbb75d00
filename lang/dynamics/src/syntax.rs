pub use quill_syntax::*;

use crate::{env::Env, err::EvalError};
use derive_more::From;
use std::{io::Write, rc::Rc};

/* ---------------------------------- Value --------------------------------- */

#[derive(From, Clone, Debug)]
pub enum Value {
    Number(f64),
    String(Rc<str>),
    Boolean(bool),
    Closure(Rc<Closure>),
    Continuation(Kont),
    Primitive(Prim),
}

/// A lambda paired with the scope it was created in.
#[derive(Clone, Debug)]
pub struct Closure {
    pub name: Option<VarName>,
    pub params: Rc<[VarName]>,
    pub body: RcExpr,
    pub env: Env,
}

pub type KontFn = dyn Fn(&mut Runtime<'_>, Value) -> Outcome;

/// "what to do with the value once it is ready"; cloning shares the closure,
/// so a captured continuation can be resumed any number of times.
#[derive(Clone)]
pub struct Kont(pub(crate) Rc<KontFn>);

pub type PrimFn = fn(&mut Runtime<'_>, Kont, Vec<Value>) -> Outcome;

/// A host builtin. It receives the caller's continuation first.
#[derive(Clone)]
pub struct Prim {
    pub name: &'static str,
    pub body: PrimFn,
}

/* ------------------------------- Trampoline ------------------------------- */

/// Result of every evaluation step.
pub type Outcome = Result<Step, EvalError>;

#[derive(Debug)]
pub enum Step {
    Done(ProgKont),
    /// the guard ran out; restart from here with a fresh budget
    Resume(Bounce),
}

/// A suspended step together with exactly the arguments it was about to receive.
#[derive(Debug)]
pub enum Bounce {
    Eval(RcExpr, Env, Kont),
    Kont(Kont, Value),
    Apply(Value, Kont, Vec<Value>),
}

#[derive(Clone, Debug)]
pub enum ProgKont {
    Ret(Value),
    Halt,
}

pub struct Runtime<'rt> {
    pub output: &'rt mut (dyn Write),
    pub(crate) budget: isize,
    pub(crate) fuel: isize,
    pub(crate) bounces: usize,
}
