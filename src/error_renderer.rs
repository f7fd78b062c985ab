//! Error rendering using ariadne
//!
//! This module renders trapezoid errors with source code snippets and the
//! offending span underlined.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use trapezoid::{compile, render_error};
///
/// if let Err(e) = compile("sin(x") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, logs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compilation { diagnostics, src } => {
            render_diagnostics(src, diagnostics, writer, use_color)
        }
        Error::Validation(err) => writeln!(writer, "Invalid input: {}", err),
        Error::Domain(err) => writeln!(writer, "Domain error: {}", err),
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
        };

        let mut report = Report::build(kind, ("<input>", diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new(("<input>", diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        // Reborrow so the writer is not moved.
        report
            .finish()
            .write(("<input>", Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ValidationError, compile, parse_numeric};

    #[test]
    fn test_render_parse_error() {
        let source = "1 + + 2";
        let err = compile(source).unwrap_err();
        let output = render_error_to_string_no_color(&err);

        assert!(output.contains("Error") || output.contains("error"));
        assert!(output.contains("1 + + 2"));
        assert!(output.contains("P001"));
    }

    #[test]
    fn test_render_unknown_identifier() {
        let err = compile("x + y").unwrap_err();
        let output = render_error_to_string_no_color(&err);

        assert!(output.contains("Unknown identifier 'y'"));
        assert!(output.contains("P002"));
        // Multi-line: header, snippet, underline
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_render_warning() {
        let err = parse_numeric("x/2").unwrap_err().into_warning();
        let output = render_error_to_string_no_color(&err);
        assert!(output.contains("Warning"));
        assert!(output.contains("P007"));
        assert!(!output.contains("Error"));
    }

    #[test]
    fn test_render_domain_error() {
        let err = parse_numeric("1/0").unwrap_err();
        let output = render_error_to_string_no_color(&err);
        assert!(output.starts_with("Domain error:"));
        assert!(output.contains("inf"));
    }

    #[test]
    fn test_render_validation_error() {
        let err = Error::from(ValidationError::ZeroPartitions);
        let output = render_error_to_string_no_color(&err);
        assert_eq!(
            output,
            "Invalid input: Number of partitions must be at least 1\n"
        );
    }
}
