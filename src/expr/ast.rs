use crate::expr::ops::BinaryOp;
use crate::visitor::ExprVisitor;

/// Represents arithmetic expressions built from constants and named formulas
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Formula(Formula),
}

/// An internal node combining two child expressions via a named binary
/// operator.
///
/// `name` is free-form display text (e.g. `"plus"`, `"div"`); it is never
/// validated against `op`. Children are exclusively owned, so a tree is
/// always finite and acyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub op: BinaryOp,
    pub name: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl Expr {
    /// Create a constant leaf.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Expr::Const(value)
    }

    /// Create a formula node, boxing both children.
    #[must_use]
    pub fn formula(op: BinaryOp, name: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Formula(Formula {
            op,
            name: name.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Route to the visitor handler for this node's variant.
    ///
    /// This is the sole traversal entry point: nothing here recurses into
    /// children. Recursion is always initiated by a visitor's own handler
    /// calling back into `accept` on the children it cares about.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &V) -> V::Output {
        match self {
            Expr::Const(value) => visitor.visit_const(*value),
            Expr::Formula(formula) => visitor.visit_formula(formula),
        }
    }
}
