use serde::Serialize;

use crate::evaluator::DomainError;

/// Sample points of one integration run: `x[i]` and `y[i] = f(x[i])`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Grid {
    /// Number of points, `n + 1` for `n` partitions.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Index of the first point whose value is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.y.iter().position(|y| !y.is_finite())
    }
}

/// One row of the sample table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    /// 1 at the endpoints, 2 in the interior.
    pub coefficient: f64,
    /// `coefficient * y`.
    pub contribution: f64,
}

/// Outcome of a composite trapezoidal integration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationResult {
    /// The trapezoidal estimate `h / 2 * weighted_sum`.
    pub value: f64,
    /// Partition width `(b - a) / n`.
    pub h: f64,
    pub weighted_sum: f64,
    pub grid: Grid,
    pub samples: Vec<Sample>,
}

impl IntegrationResult {
    /// Number of partitions.
    pub fn partitions(&self) -> usize {
        self.grid.len().saturating_sub(1)
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// The first sample that evaluated outside the integrand's domain.
    pub fn domain_error(&self) -> Option<DomainError> {
        self.grid.first_non_finite().map(|i| DomainError {
            x: Some(self.grid.x[i]),
            value: self.grid.y[i],
        })
    }
}
