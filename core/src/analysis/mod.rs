//! Accuracy of trapezoidal estimates against a known exact value.

pub mod convergence;
pub mod error;

pub use convergence::{ConvergenceSample, ConvergenceStudy, study};
pub use error::{ErrorReport, analyze};
