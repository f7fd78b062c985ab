//! Text and JSON rendering of an integration run.

use std::fmt::Write;

use nu_ansi_term::{Color, Style};
use serde::Serialize;
use trapezoid::{
    CompiledFunction, ConvergenceStudy, ErrorReport, IntegrationResult, Interval, StudyOptions,
    ValidationError, analyze, integrate, study,
};

use crate::prompt::{RULE, THIN_RULE};

/// Everything computed for one function, interval and partition count.
#[derive(Debug, Serialize)]
pub struct Report {
    pub function: String,
    pub interval: Interval,
    pub n: usize,
    pub exact: Option<f64>,
    pub result: IntegrationResult,
    pub error: Option<ErrorReport>,
    pub convergence: Option<ConvergenceStudy>,
}

impl Report {
    /// Integrate, then analyze against `exact` when it is known.
    pub fn build(
        f: &CompiledFunction,
        interval: Interval,
        n: usize,
        exact: Option<f64>,
        study_options: &StudyOptions,
    ) -> Result<Self, ValidationError> {
        let result = integrate(f, interval, n)?;
        let error = exact.map(|exact| analyze(result.value, exact));
        let convergence =
            exact.map(|exact| study(f, interval, exact, &study_options.n_values, n));

        Ok(Self {
            function: f.source().to_string(),
            interval,
            n,
            exact,
            result,
            error,
            convergence,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self, options: &TextOptions) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_text(&mut out, options);
        out
    }

    fn write_text(&self, out: &mut String, options: &TextOptions) -> std::fmt::Result {
        let strong = options.style(Color::Green.bold());

        writeln!(out, "\n{RULE}")?;
        writeln!(out, "RESULT")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "\nFunction: f(x) = {}", self.function)?;
        writeln!(out, "Interval: {}", self.interval)?;
        writeln!(out, "Partitions: {}", self.n)?;
        writeln!(out, "Width (h): {:.6}", self.result.h)?;
        writeln!(out, "\n{RULE}")?;
        writeln!(
            out,
            "{}",
            strong.paint(format!("INTEGRAL: {:.10}", self.result.value))
        )?;
        writeln!(out, "{RULE}")?;

        if let Some(err) = self.result.domain_error() {
            let warning = options.style(Color::Yellow.normal());
            writeln!(out, "\n{}", warning.paint(format!("Warning: {err}")))?;
        }

        if let (Some(exact), Some(error)) = (self.exact, self.error) {
            writeln!(out, "\nExact value: {exact:.10}")?;
            writeln!(out, "Absolute error: {:.10}", error.absolute)?;
            match error.relative {
                Some(relative) => writeln!(out, "Relative error: {relative:.4}%")?,
                None => writeln!(out, "Relative error: undefined (exact value is 0)")?,
            }
        }

        if options.table {
            self.write_sample_table(out)?;
        }

        if let Some(convergence) = &self.convergence {
            write_convergence(out, convergence, options)?;
        }

        Ok(())
    }

    fn write_sample_table(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "\n{RULE}")?;
        writeln!(out, "SAMPLE TABLE")?;
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "{:>4} | {:>12} | {:>15} | {:>11} | {:>15}",
            "i", "x_i", "f(x_i)", "Coefficient", "Contribution"
        )?;
        writeln!(out, "{THIN_RULE}")?;
        for sample in &self.result.samples {
            writeln!(
                out,
                "{:>4} | {:>12.6} | {:>15.6} | {:>11} | {:>15.6}",
                sample.index, sample.x, sample.y, sample.coefficient, sample.contribution
            )?;
        }
        writeln!(out, "{THIN_RULE}")?;
        writeln!(
            out,
            "Integral ≈ (h/2) × Σ = ({:.6}/2) × {:.6}",
            self.result.h, self.result.weighted_sum
        )?;
        writeln!(out, "         = {:.10}", self.result.value)
    }
}

fn write_convergence(
    out: &mut String,
    convergence: &ConvergenceStudy,
    options: &TextOptions,
) -> std::fmt::Result {
    let marked = options.style(Color::Yellow.bold());

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "CONVERGENCE")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{:>6} | {:>16} | {:>8}", "n", "Absolute error", "Order")?;
    writeln!(out, "{THIN_RULE}")?;

    // The first sample has no predecessor to compare against.
    let orders = std::iter::once(None).chain(convergence.observed_orders());
    for (sample, order) in convergence.samples().iter().zip(orders) {
        let order = order.map_or_else(|| "-".to_string(), |o| format!("{o:.3}"));
        let row = format!("{:>6} | {:>16.6e} | {:>8}", sample.n, sample.error, order);
        if sample.n == convergence.chosen_n() {
            writeln!(out, "{}  <- chosen n", marked.paint(row))?;
        } else {
            writeln!(out, "{row}")?;
        }
    }

    if convergence.is_truncated() {
        writeln!(
            out,
            "(stopped after {} step(s): f(x) is not finite on the next grid)",
            convergence.samples().len()
        )?;
    }
    Ok(())
}

/// Presentation switches for [`Report::to_text`].
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Print the per-sample breakdown.
    pub table: bool,
    /// Use ANSI colors.
    pub color: bool,
}

impl TextOptions {
    fn style(&self, style: Style) -> Style {
        if self.color { style } else { Style::new() }
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            table: true,
            color: false,
        }
    }
}
