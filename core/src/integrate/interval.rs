use core::fmt;

use serde::Serialize;

use super::ValidationError;

/// A closed interval `[a, b]` with finite bounds, `a < b` and a finite
/// width `b - a`.
///
/// Abscissas are computed as `a + i * h` in floating point. On an interval
/// only a few ULPs wide, neighbouring abscissas can round to the same value:
/// they are always non-decreasing, but strictly increasing only while
/// `h = (b - a) / n` is large against the spacing of doubles near `a`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Result<Self, ValidationError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(ValidationError::NonFiniteBound { a, b });
        }
        if a >= b {
            return Err(ValidationError::EmptyInterval { a, b });
        }
        if !(b - a).is_finite() {
            return Err(ValidationError::WidthOverflow { a, b });
        }
        Ok(Self { a, b })
    }

    /// Lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// `n + 1` evenly spaced abscissas from `a` to `b`. The last point is
    /// exactly `b` regardless of rounding in `a + n * h`.
    pub(crate) fn abscissas(&self, n: usize) -> Vec<f64> {
        let h = self.width() / n as f64;
        let mut xs: Vec<f64> = (0..=n).map(|i| self.a + i as f64 * h).collect();
        xs[n] = self.b;
        xs
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_interval() {
        let interval = Interval::new(-1.0, 3.0).unwrap();
        assert_eq!(interval.a(), -1.0);
        assert_eq!(interval.b(), 3.0);
        assert_eq!(interval.width(), 4.0);
        assert_eq!(interval.to_string(), "[-1, 3]");
    }

    #[test]
    fn test_empty_interval() {
        assert_eq!(
            Interval::new(1.0, 1.0),
            Err(ValidationError::EmptyInterval { a: 1.0, b: 1.0 })
        );
        assert_eq!(
            Interval::new(2.0, 1.0),
            Err(ValidationError::EmptyInterval { a: 2.0, b: 1.0 })
        );
    }

    #[test]
    fn test_non_finite_bounds() {
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(ValidationError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(ValidationError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_width_overflow() {
        assert_eq!(
            Interval::new(-f64::MAX, f64::MAX),
            Err(ValidationError::WidthOverflow {
                a: -f64::MAX,
                b: f64::MAX
            })
        );

        // Half of the range still fits.
        let interval = Interval::new(0.0, f64::MAX).unwrap();
        let xs = interval.abscissas(2);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[2], f64::MAX);
        assert!(xs.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_abscissas_on_tiny_interval_do_not_decrease() {
        let interval = Interval::new(1.0, 1.0 + f64::EPSILON).unwrap();
        let xs = interval.abscissas(4);
        assert_eq!(xs[0], 1.0);
        assert_eq!(xs[4], 1.0 + f64::EPSILON);
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        // Fewer distinct doubles than points: some abscissas repeat.
        assert!(!xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_abscissas_end_on_upper_bound() {
        let interval = Interval::new(0.0, 0.3).unwrap();
        let xs = interval.abscissas(3);
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[3], 0.3);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }
}
