use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use crate::parser::error::convert_pest_error;
use crate::parser::{BinaryOp, Expr, ParseError, ParseErrorKind, Span, UnaryOp};
use crate::stdlib::{Constant, Function};

/// Default nesting limit used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left)
        )                                               // `*`, `/`
        .op(Op::prefix(Rule::neg))                       // `-`
        .op(Op::infix(Rule::pow, Assoc::Right))          // `^`, `**` (right-assoc)
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

/// Which constructs the tree builder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Integrand expressions: the variable `x` and builtin calls are allowed.
    Function,
    /// Numeric text such as interval bounds: literals, constants and
    /// operators only.
    Numeric,
}

/// Parse an integrand expression with the default nesting limit.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse an integrand expression, rejecting input nested deeper than
/// `max_depth` before any recursive descent starts.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Expr, ParseError> {
    parse_dialect(source, max_depth, Dialect::Function)
}

/// Parse numeric text: a constant expression with no variable and no calls,
/// e.g. `2*pi/5`.
pub fn parse_constant(source: &str) -> Result<Expr, ParseError> {
    parse_dialect(source, DEFAULT_MAX_DEPTH, Dialect::Numeric)
}

pub fn parse_dialect(
    source: &str,
    max_depth: usize,
    dialect: Dialect,
) -> Result<Expr, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::Empty,
            source,
            Span::new(0, source.len()),
        ));
    }

    let (depth, at) = nesting_depth(source);
    if depth > max_depth {
        return Err(ParseError::new(
            ParseErrorKind::MaxDepthExceeded { depth, max_depth },
            source,
            Span::new(at, at + 1),
        ));
    }

    let mut pairs = ExpressionParser::parse(Rule::main, source)
        .map_err(|e| convert_pest_error(e, source))?;
    let main = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            source,
            Span::new(0, source.len()),
        )
    })?;

    let builder = TreeBuilder {
        source,
        dialect,
        max_depth,
    };
    let (expr, depth) = builder.build_main(main)?;
    tracing::debug!(source, ?dialect, depth, "Parsed expression");
    Ok(expr)
}

/// A subtree and its height (leaves have height 0).
type Built = (Expr, usize);

struct TreeBuilder<'s> {
    source: &'s str,
    dialect: Dialect,
    max_depth: usize,
}

impl<'s> TreeBuilder<'s> {
    fn error(&self, kind: ParseErrorKind, span: impl Into<Span>) -> ParseError {
        ParseError::new(kind, self.source, span.into())
    }

    /// Height of a node over children of height `child`. Left-associative
    /// chains (`x+x+...+x`) grow the tree without any nesting in the text,
    /// so the limit is enforced here as well as in the pre-scan.
    fn nest(&self, child: usize, span: impl Into<Span>) -> Result<usize, ParseError> {
        let depth = child + 1;
        if depth > self.max_depth {
            return Err(self.error(
                ParseErrorKind::MaxDepthExceeded {
                    depth,
                    max_depth: self.max_depth,
                },
                span,
            ));
        }
        Ok(depth)
    }

    fn build_main(&self, pair: Pair<'s, Rule>) -> Result<Built, ParseError> {
        let span = pair.as_span();
        let expression = pair
            .into_inner()
            .find(|p| p.as_rule() == Rule::expression)
            .ok_or_else(|| {
                self.error(
                    ParseErrorKind::Other {
                        message: "missing expression in input".to_string(),
                    },
                    span,
                )
            })?;
        self.build_expression(expression.into_inner())
    }

    fn build_expression(&self, pairs: Pairs<'s, Rule>) -> Result<Built, ParseError> {
        PRATT_PARSER
            .map_primary(|primary| self.build_primary(primary))
            .map_prefix(|op, rhs| {
                let (expr, child) = rhs?;
                let depth = self.nest(child, op.as_span())?;
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    _ => unreachable!("Unknown prefix operator: {:?}", op.as_rule()),
                };
                Ok((
                    Expr::Unary {
                        op,
                        expr: Box::new(expr),
                    },
                    depth,
                ))
            })
            .map_infix(|lhs, op, rhs| {
                let (left, left_depth) = lhs?;
                let (right, right_depth) = rhs?;
                let depth = self.nest(left_depth.max(right_depth), op.as_span())?;
                let op = match op.as_rule() {
                    Rule::add => BinaryOp::Add,
                    Rule::sub => BinaryOp::Sub,
                    Rule::mul => BinaryOp::Mul,
                    Rule::div => BinaryOp::Div,
                    Rule::pow => BinaryOp::Pow,
                    _ => unreachable!("Unknown binary operator: {:?}", op.as_rule()),
                };
                Ok((
                    Expr::Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    depth,
                ))
            })
            .parse(pairs)
    }

    fn build_primary(&self, pair: Pair<'s, Rule>) -> Result<Built, ParseError> {
        match pair.as_rule() {
            Rule::number => {
                let text = pair.as_str();
                match text.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok((Expr::Number(value), 0)),
                    _ => Err(self.error(
                        ParseErrorKind::InvalidNumber {
                            text: text.to_string(),
                        },
                        pair.as_span(),
                    )),
                }
            }

            Rule::ident => {
                let name = pair.as_str();
                if name == "x" {
                    if self.dialect == Dialect::Numeric {
                        return Err(self.error(
                            ParseErrorKind::NotAllowedHere {
                                what: "The variable 'x'".to_string(),
                            },
                            pair.as_span(),
                        ));
                    }
                    return Ok((Expr::Variable, 0));
                }
                if let Some(constant) = Constant::lookup(name) {
                    return Ok((Expr::Constant(constant), 0));
                }
                let kind = if Function::lookup(name).is_some() {
                    // A builtin used without an argument list.
                    ParseErrorKind::WrongArity {
                        name: name.to_string(),
                        expected: Function::ARITY,
                        found: 0,
                    }
                } else {
                    ParseErrorKind::UnknownIdentifier {
                        name: name.to_string(),
                    }
                };
                Err(self.error(kind, pair.as_span()))
            }

            Rule::call => {
                let span = pair.as_span();
                let mut inner = pair.into_inner();
                let name_pair = inner.next().ok_or_else(|| {
                    self.error(
                        ParseErrorKind::Other {
                            message: "missing function name".to_string(),
                        },
                        span,
                    )
                })?;
                let name = name_pair.as_str();
                if self.dialect == Dialect::Numeric {
                    return Err(self.error(
                        ParseErrorKind::NotAllowedHere {
                            what: format!("Function call '{}'", name),
                        },
                        span,
                    ));
                }
                let function = Function::lookup(name).ok_or_else(|| {
                    self.error(
                        ParseErrorKind::UnknownFunction {
                            name: name.to_string(),
                        },
                        name_pair.as_span(),
                    )
                })?;

                let mut args = inner
                    .map(|arg| self.build_expression(arg.into_inner()))
                    .collect::<Result<Vec<_>, _>>()?;
                if args.len() != Function::ARITY {
                    return Err(self.error(
                        ParseErrorKind::WrongArity {
                            name: name.to_string(),
                            expected: Function::ARITY,
                            found: args.len(),
                        },
                        span,
                    ));
                }
                let (arg, child) = args.remove(0);
                let depth = self.nest(child, span)?;
                Ok((
                    Expr::Call {
                        function,
                        arg: Box::new(arg),
                    },
                    depth,
                ))
            }

            Rule::grouped => {
                let span = pair.as_span();
                let inner = pair.into_inner().next().ok_or_else(|| {
                    self.error(
                        ParseErrorKind::Other {
                            message: "missing expression in parentheses".to_string(),
                        },
                        span,
                    )
                })?;
                self.build_expression(inner.into_inner())
            }

            _ => Err(self.error(
                ParseErrorKind::Other {
                    message: format!("Unhandled rule: {:?}", pair.as_rule()),
                },
                pair.as_span(),
            )),
        }
    }
}

/// Estimate how deep the parser and evaluator will recurse on `source`,
/// returning the maximum and the byte offset where it is reached.
///
/// Parentheses nest. Unary minus and `^` chains recurse in the Pratt parser
/// until a lower-precedence operator closes the chain at the same level.
fn nesting_depth(source: &str) -> (usize, usize) {
    let mut chains: Vec<usize> = vec![0];
    let mut total = 0;
    let mut max = (0, 0);
    let mut after_operand = false;

    let bytes = source.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                chains.push(0);
                total += 1;
                after_operand = false;
            }
            b')' => {
                if chains.len() > 1 {
                    let closed = chains.pop().unwrap_or(0);
                    total -= closed + 1;
                }
                after_operand = true;
            }
            b'^' => {
                bump(&mut chains, &mut total);
                after_operand = false;
            }
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                bump(&mut chains, &mut total);
                after_operand = false;
                i += 1;
            }
            b'-' if !after_operand => bump(&mut chains, &mut total),
            b'+' | b'-' | b'*' | b'/' | b',' => {
                if let Some(chain) = chains.last_mut() {
                    total -= *chain;
                    *chain = 0;
                }
                after_operand = false;
            }
            b if b.is_ascii_whitespace() => {}
            _ => after_operand = true,
        }
        if total > max.0 {
            max = (total, i);
        }
        i += 1;
    }
    max
}

fn bump(chains: &mut [usize], total: &mut usize) {
    if let Some(chain) = chains.last_mut() {
        *chain += 1;
        *total += 1;
    }
}
