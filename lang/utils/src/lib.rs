#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod span;
