use crate::syntax::*;
use std::{fmt, rc::Rc};

impl Kont {
    pub fn new(f: impl Fn(&mut Runtime<'_>, Value) -> Outcome + 'static) -> Self {
        Kont(Rc::new(f))
    }
    /// Finishes the run with whatever value it receives.
    pub fn top() -> Self {
        Kont::new(|_, value| Ok(Step::Done(ProgKont::Ret(value))))
    }
    pub fn ptr_eq(&self, other: &Kont) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Kont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kont({:p})", Rc::as_ptr(&self.0))
    }
}

impl Prim {
    pub fn new(name: &'static str, body: PrimFn) -> Self {
        Prim { name, body }
    }
}

impl fmt::Debug for Prim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prim({})", self.name)
    }
}

/* ---------------------------------- Value --------------------------------- */

impl Value {
    /// Only `false` is falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false))
    }
    /// Identity for callables, value equality for the rest; never coerces.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            | (Value::Number(a), Value::Number(b)) => a == b,
            | (Value::String(a), Value::String(b)) => a == b,
            | (Value::Boolean(a), Value::Boolean(b)) => a == b,
            | (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            | (Value::Continuation(a), Value::Continuation(b)) => a.ptr_eq(b),
            | (Value::Primitive(a), Value::Primitive(b)) => a.name == b.name,
            | _ => false,
        }
    }
    pub fn kind(&self) -> &'static str {
        match self {
            | Value::Number(_) => "number",
            | Value::String(_) => "string",
            | Value::Boolean(_) => "boolean",
            | Value::Closure(_) => "closure",
            | Value::Continuation(_) => "continuation",
            | Value::Primitive(_) => "primitive",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<&Literal> for Value {
    fn from(lit: &Literal) -> Self {
        match lit {
            | Literal::Num(n) => Value::Number(*n),
            | Literal::Str(s) => Value::String(s.clone()),
            | Literal::Bool(b) => Value::Boolean(*b),
        }
    }
}

impl From<Closure> for Value {
    fn from(closure: Closure) -> Self {
        Value::Closure(Rc::new(closure))
    }
}
