//! Math table
//!
//! The closed set of named functions and constants an integrand may use.
//!
//! Constants: pi, e
//! Functions: sin, cos, tan, exp, log, sqrt
//!
//! Every function follows IEEE 754 semantics: an argument outside the
//! function's domain yields NaN or an infinity rather than an error, so
//! batched evaluation never aborts halfway through a grid.

use core::fmt;

use serde::Serialize;

// ============================================================================
// Functions
// ============================================================================

/// A whitelisted unary function.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    /// Natural logarithm.
    Log,
    Sqrt,
}

impl Function {
    pub const ALL: [Function; 6] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Exp,
        Function::Log,
        Function::Sqrt,
    ];

    /// Every function takes exactly one argument.
    pub const ARITY: usize = 1;

    /// Look up a function by its source name. Names are case-sensitive.
    pub fn lookup(name: &str) -> Option<Function> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Exp => "exp",
            Function::Log => "log",
            Function::Sqrt => "sqrt",
        }
    }

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Function::Sin => value.sin(),
            Function::Cos => value.cos(),
            Function::Tan => value.tan(),
            Function::Exp => value.exp(),
            // log(0) is -inf, log of a negative number is NaN.
            Function::Log => value.ln(),
            // sqrt of a negative number is NaN.
            Function::Sqrt => value.sqrt(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Constants
// ============================================================================

/// A whitelisted named constant.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    /// Look up a constant by its source name.
    ///
    /// Only a whole identifier matches: `e` is a constant, the `e` inside
    /// `exp` is not.
    pub fn lookup(name: &str) -> Option<Constant> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => core::f64::consts::PI,
            Constant::E => core::f64::consts::E,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
