#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod syntax;
pub use syntax::{Bounce, Kont, Outcome, ProgKont, Runtime, Step, Value};
pub mod env;
pub use env::Env;
pub mod err;
pub use err::*;
pub mod ops;
pub mod eval;
pub use eval::*;
pub mod trampoline;
pub use trampoline::*;
pub mod builtin;
mod impls;
pub mod fmt;
