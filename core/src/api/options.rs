//! Configuration options for compilation and convergence studies.

use crate::parser::DEFAULT_MAX_DEPTH;

/// The canonical doubling sequence of partition counts.
pub const DEFAULT_PARTITIONS: [usize; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use trapezoid_core::api::CompileOptions;
///
/// let options = CompileOptions { max_depth: 64 };
/// assert!(trapezoid_core::compile_with_options("sin(x)", &options).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Maximum nesting depth of the expression (parentheses, negation
    /// chains, power towers).
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for a convergence study.
///
/// # Example
///
/// ```
/// use trapezoid_core::api::StudyOptions;
///
/// let options = StudyOptions::default();
/// assert_eq!(options.n_values.first(), Some(&1));
/// assert_eq!(options.n_values.last(), Some(&128));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyOptions {
    /// Partition counts to try, in order.
    ///
    /// Default: 1, 2, 4, ..., 128
    pub n_values: Vec<usize>,
}

impl StudyOptions {
    /// A doubling sequence `1, 2, 4, ...` with `count` entries.
    pub fn doubling(count: u32) -> Self {
        Self {
            n_values: (0..count.min(usize::BITS)).map(|k| 1usize << k).collect(),
        }
    }
}

impl Default for StudyOptions {
    fn default() -> Self {
        Self {
            n_values: DEFAULT_PARTITIONS.to_vec(),
        }
    }
}
