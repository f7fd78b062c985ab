use serde::Serialize;

/// Absolute and relative error of an approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorReport {
    pub absolute: f64,
    /// Percentage of `|exact|`. `None` when the exact value is zero.
    pub relative: Option<f64>,
}

/// Compare `approx` with `exact`.
///
/// ```
/// let report = trapezoid_core::analyze(0.34375, 1.0 / 3.0);
/// assert!((report.absolute - 0.0104166).abs() < 1e-6);
/// assert!((report.relative.unwrap() - 3.125).abs() < 1e-9);
///
/// assert_eq!(trapezoid_core::analyze(0.1, 0.0).relative, None);
/// ```
pub fn analyze(approx: f64, exact: f64) -> ErrorReport {
    let absolute = (exact - approx).abs();
    let relative = if exact == 0.0 {
        None
    } else {
        Some(absolute / exact.abs() * 100.0)
    };
    ErrorReport { absolute, relative }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_match() {
        assert_eq!(
            analyze(2.0, 2.0),
            ErrorReport {
                absolute: 0.0,
                relative: Some(0.0)
            }
        );
    }

    #[test]
    fn test_absolute_is_symmetric() {
        assert_eq!(analyze(1.5, 2.0).absolute, 0.5);
        assert_eq!(analyze(2.5, 2.0).absolute, 0.5);
    }

    #[test]
    fn test_relative_uses_magnitude_of_exact() {
        let report = analyze(-1.9, -2.0);
        assert_relative_eq!(report.absolute, 0.1, epsilon = 1e-12);
        assert_relative_eq!(report.relative.unwrap(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_exact_has_no_relative() {
        let report = analyze(0.25, 0.0);
        assert_eq!(report.absolute, 0.25);
        assert_eq!(report.relative, None);

        // Negative zero compares equal to zero.
        assert_eq!(analyze(0.25, -0.0).relative, None);
    }
}
