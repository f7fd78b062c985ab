//! Core evaluation logic.

use crate::parser::Expr;

/// Tree-walking evaluator for a resolved expression.
///
/// The only state is the tree itself; the value of `x` is passed per call so
/// one evaluator serves a whole grid.
pub struct Evaluator<'e> {
    expr: &'e Expr,
}

impl<'e> Evaluator<'e> {
    pub fn new(expr: &'e Expr) -> Self {
        Self { expr }
    }

    /// Evaluate the expression with `x` bound to `x`.
    pub fn eval(&self, x: f64) -> f64 {
        eval_expr(self.expr, x)
    }

    /// Evaluate element-wise. Non-finite results stay in place; one bad
    /// abscissa never hides the others.
    pub fn eval_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

fn eval_expr(expr: &Expr, x: f64) -> f64 {
    match expr {
        Expr::Binary { op, left, right } => {
            let l = eval_expr(left, x);
            let r = eval_expr(right, x);
            super::operators::eval_binary(*op, l, r)
        }
        Expr::Unary { op, expr } => super::operators::eval_unary(*op, eval_expr(expr, x)),
        Expr::Call { function, arg } => function.apply(eval_expr(arg, x)),
        Expr::Constant(constant) => constant.value(),
        Expr::Number(value) => *value,
        Expr::Variable => x,
    }
}
