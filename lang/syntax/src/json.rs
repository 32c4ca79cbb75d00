//! Loader for trees serialized as tagged JSON objects, e.g.
//! `{ "type": "binary", "operator": "+", "left": .., "right": .. }`.

use crate::{err::Result, *};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawExpr {
    Num {
        value: f64,
    },
    Str {
        value: String,
    },
    Bool {
        value: bool,
    },
    Var {
        value: String,
    },
    Assign {
        left: Box<RawExpr>,
        right: Box<RawExpr>,
    },
    Binary {
        operator: String,
        left: Box<RawExpr>,
        right: Box<RawExpr>,
    },
    Lambda {
        #[serde(default)]
        name: Option<String>,
        vars: Vec<String>,
        body: Box<RawExpr>,
    },
    If {
        cond: Box<RawExpr>,
        then: Box<RawExpr>,
        #[serde(rename = "else", default)]
        alt: Option<Box<RawExpr>>,
    },
    Prog {
        prog: Vec<RawExpr>,
    },
    Let {
        vars: Vec<RawBinding>,
        body: Box<RawExpr>,
    },
    Call {
        func: Box<RawExpr>,
        args: Vec<RawExpr>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Debug)]
struct RawBinding {
    name: String,
    #[serde(default)]
    def: Option<RawExpr>,
}

impl RawExpr {
    fn lower(self) -> Result<RcExpr> {
        let expr = match self {
            | RawExpr::Num { value } => Expr::num(value),
            | RawExpr::Str { value } => Expr::str(&value),
            | RawExpr::Bool { value } => Expr::bool(value),
            | RawExpr::Var { value } => Expr::var(value),
            | RawExpr::Assign { left, right } => Expr::assign(left.lower()?, right.lower()?),
            | RawExpr::Binary { operator, left, right } => {
                Expr::binary(operator.parse()?, left.lower()?, right.lower()?)
            }
            | RawExpr::Lambda { name, vars, body } => {
                Expr::lambda(name.map(VarName::from), vars, body.lower()?)
            }
            | RawExpr::If { cond, then, alt } => {
                let alt = alt.map(|alt| alt.lower()).transpose()?;
                Expr::if_then(cond.lower()?, then.lower()?, alt)
            }
            | RawExpr::Prog { prog } => {
                Expr::seq(prog.into_iter().map(RawExpr::lower).collect::<Result<Vec<_>>>()?)
            }
            | RawExpr::Let { vars, body } => {
                let bindings = vars
                    .into_iter()
                    .map(|RawBinding { name, def }| Ok((name, def.map(RawExpr::lower).transpose()?)))
                    .collect::<Result<Vec<_>>>()?;
                Expr::let_in(bindings, body.lower()?)
            }
            | RawExpr::Call { func, args } => {
                let args = args.into_iter().map(RawExpr::lower).collect::<Result<Vec<_>>>()?;
                Expr::call(func.lower()?, args)
            }
            | RawExpr::Unknown => Err(AstError::UnknownNodeKind)?,
        };
        Ok(expr)
    }
}

/// Parse a JSON document holding a single tree.
pub fn from_json(text: &str) -> Result<RcExpr> {
    let raw: RawExpr = serde_json::from_str(text)?;
    raw.lower()
}
