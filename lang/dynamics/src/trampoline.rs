//! The stack-depth guard and the driver loop.
//!
//! Continuations call each other directly, so the host stack grows with every
//! evaluation step. Each [`Kont::resume`] and every closure call spends one
//! unit of fuel first; once the fuel runs out the step is not taken but handed
//! back as a [`Bounce`], the native stack unwinds to [`execute`], and the
//! bounce is restarted with a full tank.
//!
//! The budget only caps how many steps nest between bounces, not how large a
//! step's frames are, so every guarded step also runs under
//! [`ensure_sufficient_stack`]. A large budget then costs heap-allocated stack
//! segments instead of a native stack overflow.

use crate::{err::*, eval, syntax::*};
use std::io::Write;

pub const DEFAULT_BUDGET: usize = 200;

/// Grow the stack when less than this is left.
const RED_ZONE: usize = 100 * 1024;
/// Size of each freshly allocated stack segment.
const STACK_PER_SEGMENT: usize = 1024 * 1024;

/// Run `f`, moving to a new stack segment first if the current one is nearly full.
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_SEGMENT, f)
}

impl<'rt> Runtime<'rt> {
    pub fn new(output: &'rt mut dyn Write) -> Self {
        Runtime::with_budget(output, DEFAULT_BUDGET)
    }
    /// A budget of zero could never make progress and is raised to one.
    pub fn with_budget(output: &'rt mut dyn Write, budget: usize) -> Self {
        let budget = budget.clamp(1, isize::MAX as usize) as isize;
        Runtime { output, budget, fuel: budget, bounces: 0 }
    }
    pub fn budget(&self) -> usize {
        self.budget as usize
    }
    /// How many times the native stack was unwound so far.
    pub fn bounces(&self) -> usize {
        self.bounces
    }
    pub(crate) fn refuel(&mut self) {
        self.fuel = self.budget;
    }
    /// Spend one unit of fuel; `false` means the caller must bounce instead.
    pub(crate) fn guard(&mut self) -> bool {
        self.fuel -= 1;
        self.fuel >= 0
    }
    /// Evaluate `expr` in `env` up to the top-level continuation.
    pub fn run(&mut self, expr: &RcExpr, env: &crate::env::Env) -> Result<ProgKont> {
        execute(self, Bounce::Eval(expr.clone(), env.clone(), Kont::top()))
    }
}

impl Kont {
    pub fn resume(&self, runtime: &mut Runtime<'_>, value: Value) -> Outcome {
        if !runtime.guard() {
            return Ok(Step::Resume(Bounce::Kont(self.clone(), value)));
        }
        ensure_sufficient_stack(|| (self.0)(runtime, value))
    }
}

impl Bounce {
    pub fn run(self, runtime: &mut Runtime<'_>) -> Outcome {
        match self {
            | Bounce::Eval(expr, env, kont) => eval::evaluate(runtime, &expr, &env, kont),
            | Bounce::Kont(kont, value) => kont.resume(runtime, value),
            | Bounce::Apply(callee, kont, args) => eval::apply(runtime, callee, kont, args),
        }
    }
    fn describe(&self) -> &'static str {
        match self {
            | Bounce::Eval(..) => "eval",
            | Bounce::Kont(..) => "continuation",
            | Bounce::Apply(..) => "apply",
        }
    }
}

/// Drive `entry` to completion, restarting every bounce on a fresh stack.
pub fn execute(runtime: &mut Runtime<'_>, entry: Bounce) -> Result<ProgKont> {
    let mut next = entry;
    loop {
        runtime.refuel();
        match next.run(runtime)? {
            | Step::Done(prog) => {
                log::debug!(
                    "run finished after {} bounce(s) with budget {}",
                    runtime.bounces,
                    runtime.budget
                );
                break Ok(prog);
            }
            | Step::Resume(bounce) => {
                runtime.bounces += 1;
                log::trace!("bounce #{}: resuming {}", runtime.bounces, bounce.describe());
                next = bounce;
            }
        }
    }
}
