//! Public error types for the string-facing API.
//!
//! Internal errors (parse errors, validation failures, domain failures) are
//! converted to [`Error`] at the API boundary so a presentation layer only has
//! to handle one type.

use core::fmt;

use thiserror::Error;

use crate::evaluator::DomainError;
use crate::integrate::ValidationError;
use crate::parser::Span;

/// Public error type for all compile and numeric-input operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text does not follow the supported grammar or whitelist.
    ///
    /// Contains one or more diagnostics with source locations.
    #[error("Compilation failed with {} error(s)", count_errors(.diagnostics))]
    Compilation {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    /// An interval or partition precondition was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A value evaluated to NaN or an infinity.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count()
}

impl Error {
    /// The diagnostics of a compilation error, empty for other kinds.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
            _ => &[],
        }
    }

    /// Demote every diagnostic to a warning, for input that is reported and
    /// then ignored.
    pub fn into_warning(self) -> Self {
        match self {
            Error::Compilation {
                mut diagnostics,
                src,
            } => {
                for diagnostic in &mut diagnostics {
                    diagnostic.severity = Severity::Warning;
                }
                Error::Compilation { diagnostics, src }
            }
            other => other,
        }
    }
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error or warning).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation cannot succeed.
    Error,
    /// Warning - the input was rejected but the run goes on without it.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<crate::parser::ParseError> for Error {
    fn from(err: crate::parser::ParseError) -> Self {
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            src: err.src,
        }
    }
}
