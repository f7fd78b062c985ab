//! Tree-walking evaluator for integrand expressions.
//!
//! ## Design Principles
//!
//! - **Never panic**: every input, including out-of-domain abscissas, yields
//!   a float
//! - **Stack-safe**: the parser bounds the tree depth before evaluation
//! - **IEEE 754 all the way**: domain failures surface as NaN or infinities,
//!   which callers can turn into a [`DomainError`]
//!
//! ## Example
//!
//! ```
//! use trapezoid_core::{evaluator, parser};
//!
//! let tree = parser::parse("x^2 + 1").unwrap();
//! assert_eq!(evaluator::eval(&tree, 3.0), 10.0);
//! ```

mod error;
mod eval;
mod operators;

#[cfg(test)]
mod eval_test;

pub use error::DomainError;
pub use eval::Evaluator;

use crate::parser::Expr;

/// Evaluate `expr` at a single abscissa.
pub fn eval(expr: &Expr, x: f64) -> f64 {
    Evaluator::new(expr).eval(x)
}

/// Evaluate `expr` at every abscissa in `xs`, preserving order and length.
pub fn eval_batch(expr: &Expr, xs: &[f64]) -> Vec<f64> {
    Evaluator::new(expr).eval_batch(xs)
}
