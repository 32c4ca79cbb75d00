use crate::syntax::*;
use std::fmt;

fn number(n: f64) -> String {
    match n {
        | n if n.is_nan() => format!("NaN"),
        | n if n.is_infinite() && n > 0.0 => format!("Infinity"),
        | n if n.is_infinite() => format!("-Infinity"),
        // `-0` reads as zero
        | n if n == 0.0 => format!("0"),
        | n => format!("{}", n),
    }
}

/// What `print` shows: strings without their quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Value::Number(n) => write!(f, "{}", number(*n)),
            | Value::String(s) => write!(f, "{}", s),
            | Value::Boolean(b) => write!(f, "{}", b),
            | Value::Closure(closure) => match &closure.name {
                | Some(name) => write!(f, "<lambda {}>", name),
                | None => write!(f, "<lambda>"),
            },
            | Value::Continuation(_) => write!(f, "<continuation>"),
            | Value::Primitive(prim) => write!(f, "<primitive {}>", prim.name),
        }
    }
}

/// What the REPL echoes: strings as literals, everything else as displayed.
impl<'a> Ugly<'a, Formatter> for Value {
    fn ugly(&self, f: &'a Formatter) -> String {
        match self {
            | Value::String(s) => Literal::Str(s.clone()).ugly(f),
            | _ => self.to_string(),
        }
    }
}
