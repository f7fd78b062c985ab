//! Public API for compiling integrands and reading numeric input.
//!
//! # Example
//!
//! ```
//! use trapezoid_core::api::{compile, parse_numeric};
//!
//! let f = compile("sin(x)").unwrap();
//! let upper = parse_numeric("pi").unwrap();
//! assert!(f.eval(upper).abs() < 1e-15);
//! ```

pub mod compile;
pub mod error;
pub mod function;
pub mod options;

pub use compile::{compile, compile_with_options, parse_numeric};
pub use error::{Diagnostic, Error, Severity};
pub use function::{Abscissas, CompiledFunction};
pub use options::{CompileOptions, DEFAULT_PARTITIONS, StudyOptions};
