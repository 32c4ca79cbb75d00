//! Host functions bound in the global scope.

use crate::{env::Env, eval, syntax::*};

pub fn link_builtin(env: &Env) {
    let prims = [
        Prim::new("print", print),
        Prim::new("println", print),
        Prim::new("CallCC", call_cc),
        Prim::new("halt", halt),
    ];
    for prim in prims {
        log::trace!("linking builtin `{}`", prim.name);
        env.def(prim.name.into(), prim.into());
    }
}

fn print(runtime: &mut Runtime<'_>, kont: Kont, args: Vec<Value>) -> Outcome {
    let line = args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().join(" ");
    writeln!(runtime.output, "{}", line)?;
    kont.resume(runtime, false.into())
}

/// `CallCC(f)` calls `f` with the current continuation as its only argument.
fn call_cc(runtime: &mut Runtime<'_>, kont: Kont, args: Vec<Value>) -> Outcome {
    let f = args.into_iter().next().unwrap_or(Value::Boolean(false));
    log::debug!("capturing {:?}", kont);
    let escape = Value::Continuation(kont.clone());
    eval::apply(runtime, f, kont, vec![escape])
}

fn halt(_runtime: &mut Runtime<'_>, _kont: Kont, _args: Vec<Value>) -> Outcome {
    log::debug!("halted");
    Ok(Step::Done(ProgKont::Halt))
}
