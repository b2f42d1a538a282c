use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::ops::{BinaryOp, UnaryOp};

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Square root of a negative number, or one that is not a perfect square
    /// - An operation whose result is NaN or infinite
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(f64::from(*n)),
            Expression::Add(l, r) => BinaryOp::Add.apply(l.evaluate()?, r.evaluate()?),
            Expression::Sub(l, r) => BinaryOp::Sub.apply(l.evaluate()?, r.evaluate()?),
            Expression::Mul(l, r) => BinaryOp::Mul.apply(l.evaluate()?, r.evaluate()?),
            Expression::Div(l, r) => BinaryOp::Div.apply(l.evaluate()?, r.evaluate()?),
            Expression::Square(e) => UnaryOp::Square.apply(e.evaluate()?),
            Expression::Sqrt(e) => UnaryOp::Sqrt.apply(e.evaluate()?),
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}
