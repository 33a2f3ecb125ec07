use crate::expr::{Expr, Formula};
use crate::visitor::ExprVisitor;

/// Rebuilds an expression tree with every constant doubled.
///
/// Operators and names are preserved unchanged and the input tree is left
/// untouched; the result is an entirely fresh tree. Not idempotent: applying
/// the visitor twice doubles twice.
pub struct DoublerVisitor;

impl ExprVisitor for DoublerVisitor {
    type Output = Expr;

    fn visit_const(&self, value: f64) -> Expr {
        Expr::constant(value * 2.0)
    }

    fn visit_formula(&self, formula: &Formula) -> Expr {
        Expr::formula(
            formula.op,
            formula.name.clone(),
            formula.left.accept(self),
            formula.right.accept(self),
        )
    }
}
