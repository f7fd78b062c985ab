//! Evaluation-time errors.
//!
//! Evaluation itself never fails: out-of-domain arguments produce NaN or an
//! infinity and flow through batched results unchanged. [`DomainError`] is
//! the typed form of that outcome for callers that ask for it explicitly.

use serde::Serialize;
use thiserror::Error;

/// An evaluation produced a non-finite value.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Error)]
#[error("Value is not finite{} (evaluated to {value})", location(.x))]
pub struct DomainError {
    /// The abscissa at which evaluation failed, `None` for constant input.
    pub x: Option<f64>,
    /// The non-finite result (NaN or an infinity).
    pub value: f64,
}

fn location(x: &Option<f64>) -> String {
    match x {
        Some(x) => format!(" at x = {}", x),
        None => String::new(),
    }
}

impl DomainError {
    /// Pass `value` through if it is finite.
    pub fn check(x: f64, value: f64) -> Result<f64, DomainError> {
        Self::check_at(Some(x), value)
    }

    /// Like [`DomainError::check`] for values that do not depend on `x`.
    pub fn check_constant(value: f64) -> Result<f64, DomainError> {
        Self::check_at(None, value)
    }

    fn check_at(x: Option<f64>, value: f64) -> Result<f64, DomainError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(DomainError { x, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes_finite_values() {
        assert_eq!(DomainError::check(1.0, 2.5), Ok(2.5));
        assert_eq!(DomainError::check_constant(-3.0), Ok(-3.0));
    }

    #[test]
    fn test_check_rejects_non_finite_values() {
        let err = DomainError::check(0.0, f64::INFINITY).unwrap_err();
        assert_eq!(err.x, Some(0.0));
        assert_eq!(err.value, f64::INFINITY);
        assert!(DomainError::check(-1.0, f64::NAN).is_err());
        assert_eq!(DomainError::check_constant(f64::NAN).unwrap_err().x, None);
    }

    #[test]
    fn test_display() {
        let err = DomainError {
            x: Some(0.0),
            value: f64::NEG_INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "Value is not finite at x = 0 (evaluated to -inf)"
        );

        let err = DomainError {
            x: None,
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Value is not finite (evaluated to inf)");
    }
}
