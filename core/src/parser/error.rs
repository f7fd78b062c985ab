use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Parser error with the offending source and location.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub src: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Input does not follow the grammar.
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// An identifier that is neither `x` nor a known constant.
    #[error("Unknown identifier '{name}'")]
    UnknownIdentifier { name: String },
    /// A call to a function outside the builtin table.
    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String },
    /// A builtin called with the wrong number of arguments.
    #[error("Function '{name}' takes {expected} argument(s), found {found}")]
    WrongArity {
        name: String,
        expected: usize,
        found: usize,
    },
    /// A literal that does not fit a finite double.
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Maximum nesting depth exceeded
    #[error("Expression nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// A valid construct used where the caller restricted the grammar.
    #[error("{what} is not allowed here")]
    NotAllowedHere { what: String },
    /// Blank input.
    #[error("Empty expression")]
    Empty,
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, src: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            src: src.into(),
            span,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ("P001", vec![]),
            ParseErrorKind::UnknownIdentifier { .. } => (
                "P002",
                vec!["The only variable is 'x'; known constants are 'pi' and 'e'".to_string()],
            ),
            ParseErrorKind::UnknownFunction { .. } => (
                "P003",
                vec!["Known functions are sin, cos, tan, exp, log and sqrt".to_string()],
            ),
            ParseErrorKind::WrongArity { .. } => ("P004", vec![]),
            ParseErrorKind::InvalidNumber { .. } => {
                ("P005", vec!["Check the number format".to_string()])
            }
            ParseErrorKind::MaxDepthExceeded { .. } => (
                "P006",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
            ParseErrorKind::NotAllowedHere { .. } => (
                "P007",
                vec!["Only numbers, pi, e and arithmetic operators are accepted".to_string()],
            ),
            ParseErrorKind::Empty => ("P008", vec![]),
            ParseErrorKind::Other { .. } => ("P999", vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: describe_found(source, span.0.start),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source, span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number => "number",
            Rule::ident => "identifier",
            Rule::add | Rule::sub | Rule::mul | Rule::div | Rule::pow => "operator",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe what sits at `pos` in the source.
fn describe_found(source: &str, pos: usize) -> String {
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}
