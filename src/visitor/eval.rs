use crate::expr::Formula;
use crate::visitor::ExprVisitor;

/// Evaluates an expression tree to a single number, children first.
///
/// Division is not guarded here: evaluating a tree that divides by zero
/// yields IEEE-754 infinity or NaN, never an error. Callers wanting the
/// guarantee run [`NoDivByZero`](crate::visitor::NoDivByZero) as a separate
/// pass beforehand.
pub struct EvalVisitor;

impl ExprVisitor for EvalVisitor {
    type Output = f64;

    fn visit_const(&self, value: f64) -> f64 {
        value
    }

    fn visit_formula(&self, formula: &Formula) -> f64 {
        formula
            .op
            .apply(formula.left.accept(self), formula.right.accept(self))
    }
}
