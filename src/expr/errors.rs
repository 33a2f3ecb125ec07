use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Division by zero or near-zero divisor")]
    DivisionByZero,
}
