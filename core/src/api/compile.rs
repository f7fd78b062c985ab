//! Entry points that turn user text into functions and numbers.

use super::{CompileOptions, CompiledFunction, Error};
use crate::evaluator::{self, DomainError};
use crate::parser;

/// Compile an integrand expression over `x` with default options.
///
/// # Example
///
/// ```
/// let f = trapezoid_core::compile("x^2 + 3*x + 1").unwrap();
/// assert_eq!(f.eval(1.0), 5.0);
///
/// assert!(trapezoid_core::compile("x + foo(x)").is_err());
/// ```
pub fn compile(source: &str) -> Result<CompiledFunction, Error> {
    compile_with_options(source, &CompileOptions::default())
}

/// Compile an integrand expression with custom options.
pub fn compile_with_options(
    source: &str,
    options: &CompileOptions,
) -> Result<CompiledFunction, Error> {
    let expr = parser::parse_with_max_depth(source, options.max_depth)?;
    tracing::debug!(source, "Compiled function");
    Ok(CompiledFunction::new(source, expr))
}

/// Evaluate numeric text such as an interval bound or an exact value.
///
/// Accepts number literals, `pi`, `e` and the arithmetic operators. The
/// variable `x` and function calls are rejected. A result that is not finite
/// (e.g. `1/0`) is a domain error.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
///
/// assert_eq!(trapezoid_core::parse_numeric("2*pi/5").unwrap(), 2.0 * PI / 5.0);
/// assert!(trapezoid_core::parse_numeric("x").is_err());
/// ```
pub fn parse_numeric(text: &str) -> Result<f64, Error> {
    let expr = parser::parse_constant(text)?;
    // The tree has no variable, so the binding is never read.
    let value = evaluator::eval(&expr, 0.0);
    Ok(DomainError::check_constant(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseErrorKind, Span};
    use std::f64::consts::{E, PI};

    fn diagnostic_code(error: &Error) -> Option<&str> {
        error.diagnostics().first().and_then(|d| d.code.as_deref())
    }

    #[test]
    fn test_compile_reports_unknown_identifier() {
        let err = compile("x + foo(x)").unwrap_err();
        assert_eq!(diagnostic_code(&err), Some("P003"));
        assert_eq!(err.diagnostics()[0].span, Span(4..7));
    }

    #[test]
    fn test_compile_respects_max_depth() {
        let source = format!("{}x{}", "(".repeat(10), ")".repeat(10));
        let options = CompileOptions { max_depth: 5 };
        let err = compile_with_options(&source, &options).unwrap_err();
        assert_eq!(diagnostic_code(&err), Some("P006"));
        assert!(compile(&source).is_ok());
    }

    #[test]
    fn test_compile_rejects_deep_left_chain() {
        let source = format!("x{}", "+x".repeat(20_000));
        let err = compile(&source).unwrap_err();
        assert_eq!(diagnostic_code(&err), Some("P006"));

        let options = CompileOptions { max_depth: 25_000 };
        let f = compile_with_options(&format!("x{}", "+x".repeat(100)), &options).unwrap();
        assert_eq!(f.eval(1.0), 101.0);
    }

    #[test]
    fn test_parse_numeric_accepts_constants() {
        assert_eq!(parse_numeric("0").unwrap(), 0.0);
        assert_eq!(parse_numeric("-1.5").unwrap(), -1.5);
        assert_eq!(parse_numeric("pi").unwrap(), PI);
        assert_eq!(parse_numeric("2*pi/5").unwrap(), 2.0 * PI / 5.0);
        assert_eq!(parse_numeric("e^2").unwrap(), E.powf(2.0));
        assert_eq!(parse_numeric("1/3").unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_parse_numeric_rejects_variable_and_calls() {
        let err = parse_numeric("x").unwrap_err();
        assert_eq!(diagnostic_code(&err), Some("P007"));

        let err = parse_numeric("sqrt(2)").unwrap_err();
        assert_eq!(diagnostic_code(&err), Some("P007"));
    }

    #[test]
    fn test_parse_numeric_rejects_malformed_text() {
        for text in ["", "2*", "pi pi", "1..2", "abc"] {
            let err = parse_numeric(text).unwrap_err();
            assert!(
                matches!(err, Error::Compilation { .. }),
                "Expected compilation error for '{}', got {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_parse_numeric_non_finite_is_domain_error() {
        match parse_numeric("1/0").unwrap_err() {
            Error::Domain(err) => {
                assert_eq!(err.x, None);
                assert_eq!(err.value, f64::INFINITY);
            }
            other => panic!("Expected Domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_is_parse_error() {
        let err = parser::parse_constant("").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Empty);
    }
}
