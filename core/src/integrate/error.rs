use thiserror::Error;

/// A precondition of the integration engine was violated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("Lower bound must be less than upper bound (got a = {a}, b = {b})")]
    EmptyInterval { a: f64, b: f64 },

    #[error("Interval bounds must be finite (got a = {a}, b = {b})")]
    NonFiniteBound { a: f64, b: f64 },

    #[error("Interval is too wide to sample: b - a overflows (got a = {a}, b = {b})")]
    WidthOverflow { a: f64, b: f64 },

    #[error("Number of partitions must be at least 1")]
    ZeroPartitions,
}
