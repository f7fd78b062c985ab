mod parsed_expr;
pub mod parser;
mod syntax;
pub mod error;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::{DEFAULT_MAX_DEPTH, Dialect, parse, parse_constant, parse_dialect, parse_with_max_depth};

pub use error::{ParseError, ParseErrorKind};
pub use parsed_expr::Expr;
pub use syntax::{BinaryOp, Span, UnaryOp};
