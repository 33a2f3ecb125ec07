/// A pure binary function over two floating-point numbers.
///
/// The four arithmetic operators are built in; `Custom` carries a
/// caller-supplied function for anything else. Operators are stateless and
/// `Copy`, so they are shared freely between trees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Custom(fn(f64, f64) -> f64),
}

impl BinaryOp {
    /// Apply the operator to its two operands.
    ///
    /// Total over all inputs: `Div` performs raw IEEE-754 division, so a
    /// zero divisor yields infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Custom(fun) => fun(lhs, rhs),
        }
    }
}
