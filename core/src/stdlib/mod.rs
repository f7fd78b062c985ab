//! Builtin functions and constants available to integrand expressions.
//!
//! The table is closed: the parser resolves every identifier against it while
//! building the tree, so an expression that compiles can only ever call the
//! functions listed here.

pub mod math;

pub use math::{Constant, Function};
