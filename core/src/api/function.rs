//! Compiled integrand functions.

use std::fmt;
use std::sync::Arc;

use crate::evaluator::{DomainError, Evaluator};
use crate::parser::Expr;

/// A compiled expression over `x`, ready for evaluation.
///
/// Compiled functions are immutable and cheap to clone (the tree is shared),
/// so the same function can be handed to the integration engine, a
/// convergence study and a plotting collaborator at once.
///
/// # Example
///
/// ```
/// let f = trapezoid_core::compile("x^2").unwrap();
///
/// assert_eq!(f.eval(3.0), 9.0);
/// assert_eq!(f.eval_batch(&[1.0, 2.0]), vec![1.0, 4.0]);
///
/// // `call` mirrors the shape of its argument.
/// assert_eq!(f.call(2.0), 4.0);
/// assert_eq!(f.call([1.0, 2.0, 3.0]), [1.0, 4.0, 9.0]);
/// ```
#[derive(Clone)]
pub struct CompiledFunction {
    source: Arc<str>,
    expr: Arc<Expr>,
}

impl CompiledFunction {
    /// This is called internally by [`crate::compile`].
    pub(crate) fn new(source: &str, expr: Expr) -> Self {
        Self {
            source: Arc::from(source),
            expr: Arc::new(expr),
        }
    }

    /// The text the function was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The resolved expression tree.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluate at a single abscissa. Out-of-domain input yields NaN or an
    /// infinity.
    pub fn eval(&self, x: f64) -> f64 {
        Evaluator::new(&self.expr).eval(x)
    }

    /// Evaluate at a single abscissa, turning a non-finite result into a
    /// [`DomainError`].
    pub fn try_eval(&self, x: f64) -> Result<f64, DomainError> {
        DomainError::check(x, self.eval(x))
    }

    /// Evaluate element-wise over `xs`. The result has the same length and
    /// order; a domain failure marks its own element only.
    pub fn eval_batch(&self, xs: &[f64]) -> Vec<f64> {
        Evaluator::new(&self.expr).eval_batch(xs)
    }

    /// Evaluate a scalar or a sequence, returning a value of matching shape.
    pub fn call<A: Abscissas>(&self, input: A) -> A::Output {
        input.evaluate(self)
    }
}

impl fmt::Debug for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFunction")
            .field("source", &self.source)
            .field("expr", &self.expr)
            .finish()
    }
}

impl fmt::Display for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Input shapes accepted by [`CompiledFunction::call`].
pub trait Abscissas {
    type Output;

    fn evaluate(self, function: &CompiledFunction) -> Self::Output;
}

impl Abscissas for f64 {
    type Output = f64;

    fn evaluate(self, function: &CompiledFunction) -> f64 {
        function.eval(self)
    }
}

impl Abscissas for &[f64] {
    type Output = Vec<f64>;

    fn evaluate(self, function: &CompiledFunction) -> Vec<f64> {
        function.eval_batch(self)
    }
}

impl Abscissas for &Vec<f64> {
    type Output = Vec<f64>;

    fn evaluate(self, function: &CompiledFunction) -> Vec<f64> {
        function.eval_batch(self)
    }
}

impl<const N: usize> Abscissas for [f64; N] {
    type Output = [f64; N];

    fn evaluate(self, function: &CompiledFunction) -> [f64; N] {
        self.map(|x| function.eval(x))
    }
}

#[cfg(test)]
mod tests {
    use crate::compile;

    #[test]
    fn test_call_matches_shape() {
        let f = compile("2*x + 1").unwrap();
        assert_eq!(f.call(1.0), 3.0);
        assert_eq!(f.call(&[0.0, 1.0][..]), vec![1.0, 3.0]);
        assert_eq!(f.call(&vec![2.0]), vec![5.0]);
        assert_eq!(f.call([0.0, 0.5, 1.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_try_eval_reports_domain_error() {
        let f = compile("log(x)").unwrap();
        assert_eq!(f.try_eval(1.0), Ok(0.0));

        let err = f.try_eval(0.0).unwrap_err();
        assert_eq!(err.x, Some(0.0));
        assert_eq!(err.value, f64::NEG_INFINITY);
    }

    #[test]
    fn test_batch_keeps_going_past_failures() {
        let f = compile("1/x").unwrap();
        let ys = f.eval_batch(&[-1.0, 0.0, 2.0]);
        assert_eq!(ys, vec![-1.0, f64::INFINITY, 0.5]);
    }

    #[test]
    fn test_clone_shares_tree() {
        let f = compile("sin(x)").unwrap();
        let g = f.clone();
        assert_eq!(f.source(), g.source());
        assert_eq!(f.expr(), g.expr());
        assert_eq!(g.to_string(), "sin(x)");
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<super::CompiledFunction>();
    }
}
