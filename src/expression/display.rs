use std::fmt;

use crate::expression::ast::Expression;

// Canonical form: every composite node carries its own parentheses, so two
// trees render equally iff they are structurally equal.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r) => write!(f, "({} + {})", l, r),
            Expression::Sub(l, r) => write!(f, "({} - {})", l, r),
            Expression::Mul(l, r) => write!(f, "({} * {})", l, r),
            Expression::Div(l, r) => write!(f, "({} / {})", l, r),
            Expression::Square(e) => write!(f, "({})^2", e),
            Expression::Sqrt(e) => write!(f, "√({})", e),
        }
    }
}
