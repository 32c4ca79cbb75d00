#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod err;
pub use err::AstError;

pub mod fmt;
pub use fmt::*;

pub mod json;

mod impls;

use derive_more::From;
use std::rc::Rc;

/* --------------------------------- Binder --------------------------------- */

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarName(pub String);

/* -------------------------------- Operator -------------------------------- */

/// Every binary operator of the language. `=` is not here; it builds an [`Assign`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

/* ------------------------------- Expression ------------------------------- */

pub type RcExpr = Rc<Expr>;

/// literals in term
#[derive(From, Clone, Debug, PartialEq)]
pub enum Literal {
    Num(f64),
    Str(Rc<str>),
    Bool(bool),
}

/// `x = e`; the target is checked to be a variable only when evaluated
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub target: RcExpr,
    pub value: RcExpr,
}

/// `a op b`
#[derive(Clone, Debug, PartialEq)]
pub struct Binary {
    pub op: BinOp,
    pub lhs: RcExpr,
    pub rhs: RcExpr,
}

/// `lambda name(x, y) body`
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    pub name: Option<VarName>,
    pub params: Rc<[VarName]>,
    pub body: RcExpr,
}

/// `if c then a else b`
#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub cond: RcExpr,
    pub then: RcExpr,
    pub alt: Option<RcExpr>,
}

/// `{ a; b; c }`
#[derive(Clone, Debug, PartialEq)]
pub struct Seq(pub Rc<[RcExpr]>);

/// `let (x = a, y) { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct Let {
    pub bindings: Rc<[LetBinding]>,
    pub body: RcExpr,
}
#[derive(Clone, Debug, PartialEq)]
pub struct LetBinding {
    pub name: VarName,
    pub init: Option<RcExpr>,
}

/// `f(a, b)`
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub callee: RcExpr,
    pub args: Rc<[RcExpr]>,
}

#[derive(From, Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(Literal),
    Var(VarName),
    Assign(Assign),
    Binary(Binary),
    Lambda(Lambda),
    If(If),
    Seq(Seq),
    Let(Let),
    Call(Call),
}
