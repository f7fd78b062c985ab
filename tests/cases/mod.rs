use once_cell::sync::Lazy;
use std::f64::consts::{E, PI};

/// An integrand with a closed-form integral over `[a, b]`.
pub struct IntegralCase {
    pub name: &'static str,
    pub expr: &'static str,
    pub a: &'static str,
    pub b: &'static str,
    pub exact: f64,
}

pub static INTEGRAL_CASES: Lazy<Vec<IntegralCase>> = Lazy::new(|| {
    vec![
        IntegralCase {
            name: "quadratic",
            expr: "x^2",
            a: "0",
            b: "1",
            exact: 1.0 / 3.0,
        },
        IntegralCase {
            name: "cubic_on_symmetric_interval",
            expr: "x**3 - x",
            a: "-2",
            b: "2",
            exact: 0.0,
        },
        IntegralCase {
            name: "sine_half_period",
            expr: "sin(x)",
            a: "0",
            b: "pi",
            exact: 2.0,
        },
        IntegralCase {
            name: "cosine_quarter_period",
            expr: "cos(x)",
            a: "0",
            b: "pi/2",
            exact: 1.0,
        },
        IntegralCase {
            name: "exponential",
            expr: "exp(x)",
            a: "0",
            b: "1",
            exact: E - 1.0,
        },
        IntegralCase {
            name: "reciprocal",
            expr: "1/x",
            a: "1",
            b: "e",
            exact: 1.0,
        },
        IntegralCase {
            name: "square_root",
            expr: "sqrt(x)",
            a: "1",
            b: "4",
            exact: 14.0 / 3.0,
        },
        IntegralCase {
            name: "logarithm",
            expr: "log(x)",
            a: "1",
            b: "e",
            exact: 1.0,
        },
        IntegralCase {
            name: "scaled_sine",
            expr: "2 * sin(2*x)",
            a: "0",
            b: "pi/2",
            exact: 2.0,
        },
        IntegralCase {
            name: "arctangent_derivative",
            expr: "1 / (1 + x^2)",
            a: "0",
            b: "1",
            exact: PI / 4.0,
        },
    ]
});
