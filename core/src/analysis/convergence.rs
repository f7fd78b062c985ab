//! Error as a function of the partition count.

use serde::Serialize;

use super::analyze;
use crate::integrate::{Integrand, Interval, integrate};

/// Absolute error of the estimate with `n` partitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceSample {
    pub n: usize,
    pub error: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceStudy {
    samples: Vec<ConvergenceSample>,
    chosen_n: usize,
    /// Index into the requested `n_values` where the study stopped early.
    truncated_at: Option<usize>,
}

impl ConvergenceStudy {
    pub fn samples(&self) -> &[ConvergenceSample] {
        &self.samples
    }

    /// The partition count the caller integrated with, carried as a marker.
    pub fn chosen_n(&self) -> usize {
        self.chosen_n
    }

    /// Position in the requested sequence of the first `n` that failed.
    pub fn truncated_at(&self) -> Option<usize> {
        self.truncated_at
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated_at.is_some()
    }

    pub fn contains_chosen(&self) -> bool {
        self.samples.iter().any(|s| s.n == self.chosen_n)
    }

    /// Empirical order `log(e_k / e_{k+1}) / log(n_{k+1} / n_k)` for each
    /// consecutive pair of samples. `None` where an error is zero or the
    /// partition count did not change.
    pub fn observed_orders(&self) -> Vec<Option<f64>> {
        self.samples
            .windows(2)
            .map(|pair| {
                let (prev, next) = (pair[0], pair[1]);
                if prev.error == 0.0 || next.error == 0.0 || prev.n == next.n {
                    return None;
                }
                let order =
                    (prev.error / next.error).ln() / (next.n as f64 / prev.n as f64).ln();
                order.is_finite().then_some(order)
            })
            .collect()
    }
}

/// Integrate `f` for each `n` in `n_values`, recording the absolute error
/// against `exact`.
///
/// Stops at the first `n` that fails validation or whose grid holds a
/// non-finite value, returning the samples gathered so far.
pub fn study<F>(
    f: &F,
    interval: Interval,
    exact: f64,
    n_values: &[usize],
    chosen_n: usize,
) -> ConvergenceStudy
where
    F: Integrand + ?Sized,
{
    let mut samples = Vec::with_capacity(n_values.len());
    let mut truncated_at = None;

    for (index, &n) in n_values.iter().enumerate() {
        let result = match integrate(f, interval, n) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%err, n, "Convergence study stopped");
                truncated_at = Some(index);
                break;
            }
        };
        if let Some(err) = result.domain_error() {
            tracing::warn!(%err, n, "Convergence study stopped");
            truncated_at = Some(index);
            break;
        }

        let error = analyze(result.value, exact).absolute;
        tracing::trace!(n, value = result.value, error, "Convergence step");
        samples.push(ConvergenceSample { n, error });
    }

    ConvergenceStudy {
        samples,
        chosen_n,
        truncated_at,
    }
}
