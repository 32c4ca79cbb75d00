use crate::{err::Result, *};
use std::{fmt, str::FromStr};

macro_rules! impl_name {
    ($name:ident, $plain:expr) => {
        impl $name {
            pub fn plain(&self) -> String {
                let $name(name) = self;
                $plain(name)
            }
        }
        impl<T: AsRef<str>> From<T> for $name {
            fn from(name: T) -> Self {
                $name(name.as_ref().to_string())
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.plain())
            }
        }
    };
}

impl_name!(VarName, str::to_string);

impl VarName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/* -------------------------------- Operator -------------------------------- */

impl BinOp {
    pub const ALL: [BinOp; 13] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Div,
        BinOp::Rem,
        BinOp::Lt,
        BinOp::Gt,
        BinOp::Le,
        BinOp::Ge,
        BinOp::Eq,
        BinOp::Ne,
        BinOp::And,
        BinOp::Or,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            | BinOp::Add => "+",
            | BinOp::Sub => "-",
            | BinOp::Mul => "*",
            | BinOp::Div => "/",
            | BinOp::Rem => "%",
            | BinOp::Lt => "<",
            | BinOp::Gt => ">",
            | BinOp::Le => "<=",
            | BinOp::Ge => ">=",
            | BinOp::Eq => "==",
            | BinOp::Ne => "!=",
            | BinOp::And => "&&",
            | BinOp::Or => "||",
        }
    }
}

impl FromStr for BinOp {
    type Err = AstError;
    fn from_str(s: &str) -> Result<Self> {
        BinOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| AstError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/* -------------------------------- Builders -------------------------------- */

impl Expr {
    pub fn num(n: f64) -> RcExpr {
        Rc::new(Literal::Num(n).into())
    }
    pub fn str(s: &str) -> RcExpr {
        Rc::new(Literal::Str(Rc::from(s)).into())
    }
    pub fn bool(b: bool) -> RcExpr {
        Rc::new(Literal::Bool(b).into())
    }
    pub fn var(name: impl Into<VarName>) -> RcExpr {
        Rc::new(Expr::Var(name.into()))
    }
    pub fn assign(target: RcExpr, value: RcExpr) -> RcExpr {
        Rc::new(Assign { target, value }.into())
    }
    pub fn binary(op: BinOp, lhs: RcExpr, rhs: RcExpr) -> RcExpr {
        Rc::new(Binary { op, lhs, rhs }.into())
    }
    pub fn lambda(
        name: Option<VarName>, params: impl IntoIterator<Item = impl Into<VarName>>, body: RcExpr,
    ) -> RcExpr {
        let params = params.into_iter().map(Into::into).collect();
        Rc::new(Lambda { name, params, body }.into())
    }
    pub fn if_then(cond: RcExpr, then: RcExpr, alt: Option<RcExpr>) -> RcExpr {
        Rc::new(If { cond, then, alt }.into())
    }
    pub fn seq(exprs: impl IntoIterator<Item = RcExpr>) -> RcExpr {
        Rc::new(Seq(exprs.into_iter().collect()).into())
    }
    pub fn let_in<N: Into<VarName>>(
        bindings: impl IntoIterator<Item = (N, Option<RcExpr>)>, body: RcExpr,
    ) -> RcExpr {
        let bindings =
            bindings.into_iter().map(|(name, init)| LetBinding { name: name.into(), init }).collect();
        Rc::new(Let { bindings, body }.into())
    }
    pub fn call(callee: RcExpr, args: impl IntoIterator<Item = RcExpr>) -> RcExpr {
        Rc::new(Call { callee, args: args.into_iter().collect() }.into())
    }
}

/* ---------------------------------- Drop ---------------------------------- */

/// Left-associative chains like `1 + 1 + ... + 1` nest along `lhs`; they are
/// unlinked one level at a time instead of dropped recursively.
impl Drop for Binary {
    fn drop(&mut self) {
        let mut lhs = std::mem::replace(&mut self.lhs, Expr::bool(false));
        while let Ok(Expr::Binary(mut inner)) = Rc::try_unwrap(lhs) {
            lhs = std::mem::replace(&mut inner.lhs, Expr::bool(false));
        }
    }
}
