use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Rendered with source snippets before exiting.
    #[error(transparent)]
    Trapezoid(#[from] trapezoid::Error),

    #[error("No {name} was given")]
    #[diagnostic(
        code(cli::missing_input),
        help("Pass it as an option or run in a terminal to be prompted")
    )]
    MissingInput { name: &'static str },

    #[error("Invalid number of partitions '{text}'")]
    #[diagnostic(code(cli::partitions), help("Use a positive whole number, e.g. 10"))]
    InvalidPartitions { text: String },

    #[error("Failed to read input")]
    #[diagnostic(code(cli::io))]
    Editor(#[source] std::io::Error),

    #[error("Failed to write JSON")]
    #[diagnostic(code(cli::json))]
    Json(#[from] serde_json::Error),
}

impl From<trapezoid::ValidationError> for CliError {
    fn from(err: trapezoid::ValidationError) -> Self {
        CliError::Trapezoid(err.into())
    }
}
