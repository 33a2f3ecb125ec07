//! Visitor traversals over expression trees

mod all_small;
mod doubler;
mod eval;
mod no_div_by_zero;
mod print;

pub use all_small::AllSmallVisitor;
pub use doubler::DoublerVisitor;
pub use eval::EvalVisitor;
pub use no_div_by_zero::{NoDivByZero, DIVISOR_EPSILON};
pub use print::PrintVisitor;

use crate::expr::Formula;

/// A traversal strategy over expression trees, one handler per node variant.
///
/// Implementations drive their own recursion: a handler that needs child
/// results calls [`Expr::accept`](crate::expr::Expr::accept) on the children
/// with `self`. Visitors are stateless; each invocation is a fresh traversal.
pub trait ExprVisitor {
    type Output;

    /// Handle a constant leaf.
    fn visit_const(&self, value: f64) -> Self::Output;

    /// Handle a formula node.
    fn visit_formula(&self, formula: &Formula) -> Self::Output;
}
