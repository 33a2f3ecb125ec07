//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod ops;

pub use ast::{Expr, Formula};
pub use errors::ExprError;
pub use ops::BinaryOp;
