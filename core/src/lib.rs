//! Trapezoidal-rule integration of user-supplied expressions.
//!
//! Text is parsed against a closed grammar and whitelist into a typed tree,
//! compiled into a reusable [`CompiledFunction`], then sampled by the
//! integration engine.
//!
//! ```
//! use trapezoid_core::{Interval, analyze, compile, integrate, parse_numeric};
//!
//! let f = compile("sin(x)").unwrap();
//! let interval = Interval::new(0.0, parse_numeric("pi").unwrap()).unwrap();
//! let result = integrate(&f, interval, 100).unwrap();
//!
//! let report = analyze(result.value, 2.0);
//! assert!(report.absolute < 1e-3);
//! ```

pub mod analysis;
pub mod api;
pub mod evaluator;
pub mod integrate;
pub mod parser;
pub mod stdlib;

pub use analysis::{ConvergenceSample, ConvergenceStudy, ErrorReport, analyze, study};
pub use api::{
    CompileOptions, CompiledFunction, DEFAULT_PARTITIONS, Diagnostic, Error, Severity,
    StudyOptions, compile, compile_with_options, parse_numeric,
};
pub use evaluator::DomainError;
pub use integrate::{
    Grid, Integrand, IntegrationResult, Interval, Sample, ValidationError, integrate,
};
