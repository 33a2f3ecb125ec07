use crate::expr::Formula;
use crate::visitor::ExprVisitor;

/// Renders an expression tree as a fully parenthesized prefix string.
///
/// Formula nodes print their own `name` field, not anything derived from the
/// operator: `(plus 5.0 3.14)`.
pub struct PrintVisitor;

// Decimal form with at least one fractional digit, so integral values render
// as "5.0" rather than "5".
fn format_constant(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl ExprVisitor for PrintVisitor {
    type Output = String;

    fn visit_const(&self, value: f64) -> String {
        format_constant(value)
    }

    fn visit_formula(&self, formula: &Formula) -> String {
        format!(
            "({} {} {})",
            formula.name,
            formula.left.accept(self),
            formula.right.accept(self)
        )
    }
}
