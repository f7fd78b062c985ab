//! Trapezoid - numerical integration of user-supplied expressions
//!
//! # Overview
//!
//! Trapezoid approximates definite integrals with the composite trapezoidal
//! rule. Integrands are written as plain text over the variable `x`, parsed
//! against a closed grammar and whitelist, and compiled into reusable
//! functions. Results carry the full sample grid so they can be tabulated,
//! and an optional exact value enables error and convergence analysis.
//!
//! # Quick Start
//!
//! ```
//! use trapezoid::{Interval, analyze, compile, integrate, parse_numeric};
//!
//! let f = compile("x^2").unwrap();
//! let interval = Interval::new(0.0, parse_numeric("1").unwrap()).unwrap();
//!
//! let result = integrate(&f, interval, 4).unwrap();
//! assert_eq!(result.value, 0.34375);
//!
//! let report = analyze(result.value, 1.0 / 3.0);
//! assert!(report.relative.unwrap() < 3.2);
//! ```
//!
//! # Errors
//!
//! Text that fails to compile produces an [`Error`] with one or more
//! diagnostics. [`render_error`] prints them with the offending span
//! underlined:
//!
//! ```
//! use trapezoid::{compile, render_error_to_string_no_color};
//!
//! let err = compile("x + foo(x)").unwrap_err();
//! let output = render_error_to_string_no_color(&err);
//! assert!(output.contains("Unknown function 'foo'"));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from trapezoid_core
pub use trapezoid_core::api::{
    Abscissas, CompileOptions, CompiledFunction, DEFAULT_PARTITIONS, Diagnostic, Error, Severity,
    StudyOptions, compile, compile_with_options, parse_numeric,
};

// Re-export the numerical layer
pub use trapezoid_core::analysis::{
    ConvergenceSample, ConvergenceStudy, ErrorReport, analyze, study,
};
pub use trapezoid_core::integrate::{
    Grid, Integrand, IntegrationResult, Interval, Sample, ValidationError, integrate,
};

// Re-export errors and the syntax tree
pub use trapezoid_core::evaluator::DomainError;
pub use trapezoid_core::parser::{self, Expr};
