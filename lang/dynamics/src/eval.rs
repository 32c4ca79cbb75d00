//! Continuation-passing evaluation.
//!
//! Nothing here returns a language value: each node hands its result to the
//! continuation it was given, or hands control to a different continuation
//! altogether. What comes back up the host stack is only the [`Outcome`] of
//! the step.

use crate::{env::Env, err::*, ops, syntax::*, trampoline::ensure_sufficient_stack};
use std::rc::Rc;

/// Evaluate `expr` and pass its value to `kont`.
///
/// Descending into an operand spends fuel just like resuming a continuation,
/// so long operator chains bounce before they exhaust the native stack.
pub fn evaluate(runtime: &mut Runtime<'_>, expr: &RcExpr, env: &Env, kont: Kont) -> Outcome {
    if !runtime.guard() {
        return Ok(Step::Resume(Bounce::Eval(expr.clone(), env.clone(), kont)));
    }
    ensure_sufficient_stack(|| dispatch(runtime, expr, env, kont))
}

fn dispatch(runtime: &mut Runtime<'_>, expr: &RcExpr, env: &Env, kont: Kont) -> Outcome {
    match expr.as_ref() {
        | Expr::Lit(lit) => kont.resume(runtime, lit.into()),
        | Expr::Var(name) => {
            let value = env.get(name)?;
            kont.resume(runtime, value)
        }
        | Expr::Assign(Assign { target, value }) => {
            let Expr::Var(name) = target.as_ref() else {
                let target = target.ugly(&Formatter::new());
                return Err(EvalError::InvalidAssignmentTarget(target));
            };
            let (name, env_) = (name.clone(), env.clone());
            evaluate(
                runtime,
                value,
                env,
                Kont::new(move |runtime, value| {
                    let value = env_.set(&name, value)?;
                    kont.resume(runtime, value)
                }),
            )
        }
        | Expr::Binary(Binary { op, lhs, rhs }) => {
            let (op, rhs, env_) = (*op, rhs.clone(), env.clone());
            evaluate(
                runtime,
                lhs,
                env,
                Kont::new(move |runtime, a| {
                    let kont = kont.clone();
                    evaluate(
                        runtime,
                        &rhs,
                        &env_,
                        Kont::new(move |runtime, b| {
                            let value = ops::apply(op, &a, &b)?;
                            kont.resume(runtime, value)
                        }),
                    )
                }),
            )
        }
        | Expr::Lambda(lambda) => kont.resume(runtime, make_lambda(lambda, env)),
        | Expr::If(If { cond, then, alt }) => {
            let (then, alt, env_) = (then.clone(), alt.clone(), env.clone());
            evaluate(
                runtime,
                cond,
                env,
                Kont::new(move |runtime, cond| {
                    if cond.is_truthy() {
                        evaluate(runtime, &then, &env_, kont.clone())
                    } else if let Some(alt) = &alt {
                        evaluate(runtime, alt, &env_, kont.clone())
                    } else {
                        kont.resume(runtime, false.into())
                    }
                }),
            )
        }
        | Expr::Seq(Seq(exprs)) => {
            eval_seq(runtime, exprs.clone(), 0, false.into(), env.clone(), kont)
        }
        | Expr::Let(Let { bindings, body }) => {
            eval_let(runtime, bindings.clone(), 0, env.clone(), body.clone(), kont)
        }
        | Expr::Call(Call { callee, args }) => {
            let (args, env_) = (args.clone(), env.clone());
            evaluate(
                runtime,
                callee,
                env,
                Kont::new(move |runtime, callee| {
                    let vals = Vec::with_capacity(args.len());
                    eval_args(runtime, callee, args.clone(), vals, env_.clone(), kont.clone())
                }),
            )
        }
    }
}

fn make_lambda(lambda: &Lambda, env: &Env) -> Value {
    let Lambda { name, params, body } = lambda;
    let (params, body) = (params.clone(), body.clone());
    match name {
        | None => Closure { name: None, params, body, env: env.clone() }.into(),
        | Some(name) => {
            // the self-name lives in a scope of its own, between `env` and the call frames
            let scope = env.extend();
            let closure: Value =
                Closure { name: Some(name.clone()), params, body, env: scope.clone() }.into();
            scope.def(name.clone(), closure)
        }
    }
}

fn eval_seq(
    runtime: &mut Runtime<'_>, exprs: Rc<[RcExpr]>, idx: usize, last: Value, env: Env, kont: Kont,
) -> Outcome {
    let Some(expr) = exprs.get(idx).cloned() else {
        return kont.resume(runtime, last);
    };
    let env_ = env.clone();
    evaluate(
        runtime,
        &expr,
        &env,
        Kont::new(move |runtime, value| {
            eval_seq(runtime, exprs.clone(), idx + 1, value, env_.clone(), kont.clone())
        }),
    )
}

fn eval_let(
    runtime: &mut Runtime<'_>, bindings: Rc<[LetBinding]>, idx: usize, env: Env, body: RcExpr,
    kont: Kont,
) -> Outcome {
    let Some(LetBinding { name, init }) = bindings.get(idx).cloned() else {
        return evaluate(runtime, &body, &env, kont);
    };
    match init {
        | Some(init) => {
            let env_ = env.clone();
            evaluate(
                runtime,
                &init,
                &env,
                Kont::new(move |runtime, value| {
                    let scope = env_.extend();
                    scope.def(name.clone(), value);
                    eval_let(runtime, bindings.clone(), idx + 1, scope, body.clone(), kont.clone())
                }),
            )
        }
        | None => {
            let scope = env.extend();
            scope.def(name, false.into());
            eval_let(runtime, bindings, idx + 1, scope, body, kont)
        }
    }
}

fn eval_args(
    runtime: &mut Runtime<'_>, callee: Value, args: Rc<[RcExpr]>, vals: Vec<Value>, env: Env,
    kont: Kont,
) -> Outcome {
    let Some(arg) = args.get(vals.len()).cloned() else {
        return apply(runtime, callee, kont, vals);
    };
    let env_ = env.clone();
    evaluate(
        runtime,
        &arg,
        &env,
        Kont::new(move |runtime, value| {
            // the continuation may be resumed again later, so the prefix is copied
            let mut vals = vals.clone();
            vals.push(value);
            eval_args(runtime, callee.clone(), args.clone(), vals, env_.clone(), kont.clone())
        }),
    )
}

/// Call `callee` with the continuation first and then the user-visible arguments.
pub fn apply(runtime: &mut Runtime<'_>, callee: Value, kont: Kont, args: Vec<Value>) -> Outcome {
    match callee {
        | Value::Closure(closure) => {
            if !runtime.guard() {
                return Ok(Step::Resume(Bounce::Apply(Value::Closure(closure), kont, args)));
            }
            let scope = closure.env.extend();
            let mut args = args.into_iter();
            for param in closure.params.iter() {
                scope.def(param.clone(), args.next().unwrap_or(Value::Boolean(false)));
            }
            evaluate(runtime, &closure.body, &scope, kont)
        }
        | Value::Continuation(saved) => {
            let value = args.into_iter().next().unwrap_or(Value::Boolean(false));
            saved.resume(runtime, value)
        }
        | Value::Primitive(prim) => (prim.body)(runtime, kont, args),
        | other => Err(EvalError::NotCallable(other.to_string())),
    }
}
