use core::fmt;

use serde::Serialize;

use crate::parser::{BinaryOp, UnaryOp};
use crate::stdlib::{Constant, Function};

/// A resolved expression tree over the single variable `x`.
///
/// Identifiers are resolved while parsing, so the tree can only reference
/// the variable, the whitelisted constants and the whitelisted functions.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Call {
        function: Function,
        arg: Box<Expr>,
    },
    Constant(Constant),
    Number(f64),
    Variable,
}

// Fully parenthesized, so the printed form parses back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Expr::Unary {
                op: UnaryOp::Neg,
                expr,
            } => write!(f, "(-{})", expr),
            Expr::Call { function, arg } => write!(f, "{}({})", function, arg),
            Expr::Constant(c) => write!(f, "{}", c),
            Expr::Number(n) => write!(f, "{:?}", n),
            Expr::Variable => f.write_str("x"),
        }
    }
}
