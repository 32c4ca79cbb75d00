//! The formatter traits.

use crate::*;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Ugly<'a, Fmter> {
    fn ugly(&self, f: &'a Fmter) -> String;
}

/// Prints expressions back as source text that the parser accepts.
#[derive(Default)]
pub struct Formatter {}

impl Formatter {
    pub fn new() -> Self {
        Formatter {}
    }
}

fn join<'a, T: Ugly<'a, Formatter>>(items: &[T], sep: &str, f: &'a Formatter) -> String {
    items.iter().map(|item| item.ugly(f)).collect::<Vec<_>>().join(sep)
}

impl<'a> Ugly<'a, Formatter> for VarName {
    fn ugly(&self, _f: &'a Formatter) -> String {
        self.plain()
    }
}

impl<'a> Ugly<'a, Formatter> for Literal {
    fn ugly(&self, _f: &'a Formatter) -> String {
        match self {
            // there is no unary minus in the surface syntax
            | Literal::Num(n) if n.is_sign_negative() && *n != 0.0 => format!("(0 - {})", -n),
            | Literal::Num(n) => format!("{}", n),
            | Literal::Str(s) => {
                let mut s_ = String::from("\"");
                for c in s.chars() {
                    if c == '"' || c == '\\' {
                        s_.push('\\');
                    }
                    s_.push(c);
                }
                s_.push('"');
                s_
            }
            | Literal::Bool(b) => format!("{}", b),
        }
    }
}

impl<'a> Ugly<'a, Formatter> for LetBinding {
    fn ugly(&self, f: &'a Formatter) -> String {
        let LetBinding { name, init } = self;
        match init {
            | Some(init) => format!("{} = {}", name.ugly(f), init.ugly(f)),
            | None => name.ugly(f),
        }
    }
}

impl<'a> Ugly<'a, Formatter> for Expr {
    fn ugly(&self, f: &'a Formatter) -> String {
        match self {
            | Expr::Lit(lit) => lit.ugly(f),
            | Expr::Var(name) => name.ugly(f),
            | Expr::Assign(Assign { target, value }) => {
                format!("{} = {}", target.ugly(f), value.ugly(f))
            }
            | Expr::Binary(Binary { op, lhs, rhs }) => {
                format!("({} {} {})", lhs.ugly(f), op, rhs.ugly(f))
            }
            | Expr::Lambda(Lambda { name, params, body }) => {
                let name = match name {
                    | Some(name) => format!(" {}", name.ugly(f)),
                    | None => format!(""),
                };
                format!("lambda{}({}) {}", name, join(params, ", ", f), body.ugly(f))
            }
            | Expr::If(If { cond, then, alt }) => {
                let mut s = format!("if {} then {}", cond.ugly(f), then.ugly(f));
                if let Some(alt) = alt {
                    s += &format!(" else {}", alt.ugly(f));
                }
                s
            }
            | Expr::Seq(Seq(exprs)) => format!("{{ {} }}", join(exprs, "; ", f)),
            | Expr::Let(Let { bindings, body }) => {
                let body = match body.as_ref() {
                    | Expr::Seq(_) => body.ugly(f),
                    | _ => format!("{{ {} }}", body.ugly(f)),
                };
                format!("let ({}) {}", join(bindings, ", ", f), body)
            }
            | Expr::Call(Call { callee, args }) => {
                format!("{}({})", callee.ugly(f), join(args, ", ", f))
            }
        }
    }
}
