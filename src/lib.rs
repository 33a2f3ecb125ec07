//! Arith-visitor - arithmetic expression trees traversed via visitors
//!
//! This library provides an expression tree of constants and named binary
//! formulas, together with five visitor traversals over it: evaluation,
//! printing, doubling every constant, checking that every constant is small,
//! and checking that no formula divides by a (near-)zero value.
//!
//! Validation and evaluation are deliberately separate passes: evaluation
//! never guards division, and callers who care run the safety check first
//! (or use [`evaluate_checked`], which composes the two).

pub mod expr;
pub mod visitor;

// Re-export the main public API
pub use expr::{BinaryOp, Expr, ExprError, Formula};
pub use visitor::{
    AllSmallVisitor, DoublerVisitor, EvalVisitor, ExprVisitor, NoDivByZero, PrintVisitor,
};

use log::debug;

/// Evaluate an expression tree after certifying it free of division by
/// (near-)zero.
///
/// Runs [`NoDivByZero`] over the whole tree first and only invokes
/// [`EvalVisitor`] once the tree is certified safe, so a rejected tree is
/// never partially evaluated.
///
/// # Errors
///
/// Returns [`ExprError::DivisionByZero`] when any `"div"`-named formula in
/// the tree has a divisor whose magnitude is at or below
/// [`visitor::DIVISOR_EPSILON`].
///
/// # Examples
///
/// ```
/// use arith_visitor::{evaluate_checked, BinaryOp, Expr};
///
/// let expr = Expr::formula(
///     BinaryOp::Div,
///     "div",
///     Expr::constant(1.0),
///     Expr::constant(4.0),
/// );
/// assert_eq!(evaluate_checked(&expr), Ok(0.25));
///
/// let unchecked = Expr::formula(
///     BinaryOp::Div,
///     "div",
///     Expr::constant(1.0),
///     Expr::constant(0.0),
/// );
/// assert!(evaluate_checked(&unchecked).is_err());
/// ```
pub fn evaluate_checked(expr: &Expr) -> Result<f64, ExprError> {
    debug!("Checking expression for unsafe division: {}", expr);

    if !expr.accept(&NoDivByZero) {
        return Err(ExprError::DivisionByZero);
    }

    let value = expr.accept(&EvalVisitor);
    debug!("Expression evaluated to: {}", value);
    Ok(value)
}
