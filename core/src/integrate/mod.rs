//! Composite trapezoidal rule.
//!
//! For `n` partitions of `[a, b]` with width `h = (b - a) / n`:
//!
//! ```text
//! T = h / 2 * (y_0 + 2 y_1 + ... + 2 y_{n-1} + y_n)
//! ```
//!
//! # Example
//!
//! ```
//! use trapezoid_core::{compile, integrate, Interval};
//!
//! let f = compile("x^2").unwrap();
//! let result = integrate(&f, Interval::new(0.0, 1.0).unwrap(), 4).unwrap();
//! assert_eq!(result.value, 0.34375);
//! assert_eq!(result.grid.len(), 5);
//! ```

mod error;
mod grid;
mod interval;


pub use error::ValidationError;
pub use grid::{Grid, IntegrationResult, Sample};
pub use interval::Interval;

use crate::api::CompiledFunction;

/// Anything that can be sampled on a grid of abscissas.
///
/// Implemented for [`CompiledFunction`] and for plain closures, so the engine
/// can be driven by code as well as by parsed text.
pub trait Integrand {
    /// Evaluate at every abscissa. The result has the same length as `xs`.
    fn sample(&self, xs: &[f64]) -> Vec<f64>;
}

impl Integrand for CompiledFunction {
    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        self.eval_batch(xs)
    }
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self(x)).collect()
    }
}

/// Approximate the integral of `f` over `interval` with `n` partitions.
///
/// Abscissas are non-decreasing; see [`Interval`] for when neighbouring
/// points of a very narrow interval coincide.
///
/// Non-finite samples are not an error here: they propagate into `value`
/// and can be located with [`IntegrationResult::domain_error`].
pub fn integrate<F>(f: &F, interval: Interval, n: usize) -> Result<IntegrationResult, ValidationError>
where
    F: Integrand + ?Sized,
{
    if n == 0 {
        return Err(ValidationError::ZeroPartitions);
    }

    let h = interval.width() / n as f64;
    let x = interval.abscissas(n);
    let y = f.sample(&x);
    debug_assert_eq!(x.len(), y.len());

    let samples: Vec<Sample> = x
        .iter()
        .zip(&y)
        .enumerate()
        .map(|(index, (&x, &y))| {
            let coefficient = if index == 0 || index == n { 1.0 } else { 2.0 };
            Sample {
                index,
                x,
                y,
                coefficient,
                contribution: coefficient * y,
            }
        })
        .collect();

    let weighted_sum: f64 = samples.iter().map(|s| s.contribution).sum();
    let value = h / 2.0 * weighted_sum;

    tracing::debug!(%interval, n, h, value, "Integrated");

    let result = IntegrationResult {
        value,
        h,
        weighted_sum,
        grid: Grid { x, y },
        samples,
    };

    if let Some(err) = result.domain_error() {
        tracing::warn!(%err, n, "Integrand is not finite on the grid");
    }

    Ok(result)
}
