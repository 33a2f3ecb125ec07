use crate::expr::Formula;
use crate::visitor::ExprVisitor;

/// True iff every constant anywhere in the tree is strictly less than 10.
pub struct AllSmallVisitor;

impl ExprVisitor for AllSmallVisitor {
    type Output = bool;

    fn visit_const(&self, value: f64) -> bool {
        value < 10.0
    }

    fn visit_formula(&self, formula: &Formula) -> bool {
        formula.left.accept(self) && formula.right.accept(self)
    }
}
