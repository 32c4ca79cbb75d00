//! Lexical scopes.
//!
//! Every scope owns a map of its own bindings and points to the scope it was
//! extended from. Closures keep their scope alive by holding an [`Env`].

use crate::{err::*, syntax::*};
use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

#[derive(Clone)]
pub struct Env(Rc<Scope>);

struct Scope {
    vars: RefCell<HashMap<VarName, Value>>,
    parent: Option<Env>,
}

impl Env {
    /// A fresh scope without a parent.
    pub fn global() -> Self {
        Env(Rc::new(Scope { vars: RefCell::new(HashMap::new()), parent: None }))
    }
    pub fn extend(&self) -> Self {
        Env(Rc::new(Scope { vars: RefCell::new(HashMap::new()), parent: Some(self.clone()) }))
    }
    pub fn parent(&self) -> Option<&Env> {
        self.0.parent.as_ref()
    }
    pub fn is_global(&self) -> bool {
        self.0.parent.is_none()
    }
    /// The nearest scope, starting from this one, that binds `name`.
    pub fn lookup(&self, name: &VarName) -> Option<Env> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if env.0.vars.borrow().contains_key(name) {
                return Some(env.clone());
            }
            scope = env.parent();
        }
        None
    }
    pub fn get(&self, name: &VarName) -> Result<Value> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(value) = env.0.vars.borrow().get(name) {
                return Ok(value.clone());
            }
            scope = env.parent();
        }
        Err(EvalError::UndefinedVariable(name.clone()))
    }
    /// Mutate the binding in the scope that owns `name`. An unbound name is
    /// created only when assigned from the global scope itself.
    pub fn set(&self, name: &VarName, value: Value) -> Result<Value> {
        let owner = match self.lookup(name) {
            | Some(owner) => owner,
            | None if self.is_global() => self.clone(),
            | None => Err(EvalError::UndefinedVariable(name.clone()))?,
        };
        owner.0.vars.borrow_mut().insert(name.clone(), value.clone());
        Ok(value)
    }
    /// Bind `name` in this scope only, shadowing any outer binding.
    pub fn def(&self, name: VarName, value: Value) -> Value {
        self.0.vars.borrow_mut().insert(name, value.clone());
        value
    }
    /// The names bound directly in this scope, sorted.
    pub fn names(&self) -> Vec<VarName> {
        let mut names: Vec<_> = self.0.vars.borrow().keys().cloned().collect();
        names.sort();
        names
    }
    pub fn ptr_eq(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// scopes and closures refer to each other, so only the shape is printed
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        let mut scope = self.parent();
        while let Some(env) = scope {
            depth += 1;
            scope = env.parent();
        }
        f.debug_struct("Env").field("depth", &depth).field("names", &self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(value: &Value) -> f64 {
        match value {
            | Value::Number(n) => *n,
            | other => panic!("expected a number, got {}", other),
        }
    }

    #[test]
    fn inner_scopes_shadow_outer_ones() {
        let global = Env::global();
        global.def("x".into(), 1.0.into());
        let inner = global.extend();
        inner.def("x".into(), 2.0.into());
        assert_eq!(num(&inner.get(&"x".into()).unwrap()), 2.0);
        assert_eq!(num(&global.get(&"x".into()).unwrap()), 1.0);
    }

    #[test]
    fn set_mutates_the_owning_scope() {
        let global = Env::global();
        global.def("x".into(), 1.0.into());
        let inner = global.extend().extend();
        inner.set(&"x".into(), 5.0.into()).unwrap();
        assert!(inner.lookup(&"x".into()).unwrap().ptr_eq(&global));
        assert_eq!(num(&global.get(&"x".into()).unwrap()), 5.0);
        assert_eq!(inner.names(), Vec::<VarName>::new());
    }

    #[test]
    fn set_of_unknown_name_is_asymmetric() {
        let global = Env::global();
        let inner = global.extend();
        match inner.set(&"y".into(), 1.0.into()) {
            | Err(EvalError::UndefinedVariable(name)) => assert_eq!(name, "y".into()),
            | other => panic!("expected an undefined variable, got {:?}", other),
        }
        assert!(global.lookup(&"y".into()).is_none());

        global.set(&"y".into(), 1.0.into()).unwrap();
        assert_eq!(global.names(), vec![VarName::from("y")]);
        assert_eq!(num(&inner.get(&"y".into()).unwrap()), 1.0);
    }

    #[test]
    fn missing_names_are_reported() {
        let env = Env::global().extend();
        assert!(matches!(env.get(&"nope".into()), Err(EvalError::UndefinedVariable(_))));
    }
}
