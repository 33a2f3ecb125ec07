use log::debug;

use crate::expr::Formula;
use crate::visitor::eval::EvalVisitor;
use crate::visitor::ExprVisitor;

/// Divisor magnitudes at or below this threshold are treated as unsafe.
pub const DIVISOR_EPSILON: f64 = 0.0001;

/// Checks that no formula named `"div"` divides by a (near-)zero value.
///
/// The check is keyed on the node's `name` field being exactly `"div"`, not
/// on its operator. A divisor counts as safe only when its evaluated
/// magnitude is strictly greater than [`DIVISOR_EPSILON`].
pub struct NoDivByZero;

impl ExprVisitor for NoDivByZero {
    type Output = bool;

    fn visit_const(&self, _value: f64) -> bool {
        true
    }

    fn visit_formula(&self, formula: &Formula) -> bool {
        // Certify both subtrees before touching the divisor: evaluating the
        // right child below is only sound once its own divisions are known
        // safe, and an unsafe subtree must never be evaluated at all.
        if !(formula.left.accept(self) && formula.right.accept(self)) {
            return false;
        }

        if formula.name == "div" {
            let divisor = formula.right.accept(&EvalVisitor);
            if divisor.abs() > DIVISOR_EPSILON {
                true
            } else {
                debug!("Unsafe divisor {} in '{}' formula", divisor, formula.name);
                false
            }
        } else {
            true
        }
    }
}
