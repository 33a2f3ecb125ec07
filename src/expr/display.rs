use std::fmt;

use crate::expr::ast::Expr;
use crate::visitor::PrintVisitor;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.accept(&PrintVisitor))
    }
}
