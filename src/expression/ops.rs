use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Absolute tolerance used when deciding whether a square root is integral
pub const ROOT_TOLERANCE: f64 = 1e-9;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

#[inline]
fn check_real(value: f64) -> Result<f64, ExpressionError> {
    if value.is_nan() {
        Err(ExpressionError::NonRealResult)
    } else if value.is_infinite() {
        Err(ExpressionError::Overflow)
    } else {
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// # Errors
    ///
    /// Returns an error on division by zero, or when the result is NaN or
    /// infinite.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        let value = match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => {
                if is_zero(right) {
                    return Err(ExpressionError::DivisionByZero);
                }
                left / right
            }
        };
        check_real(value)
    }

    pub fn build(self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            BinaryOp::Add => Expression::Add(l, r),
            BinaryOp::Sub => Expression::Sub(l, r),
            BinaryOp::Mul => Expression::Mul(l, r),
            BinaryOp::Div => Expression::Div(l, r),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Square,
    Sqrt,
}

impl UnaryOp {
    /// # Errors
    ///
    /// Square fails only on overflow. Square root fails for negative values
    /// and for values whose root is not within [`ROOT_TOLERANCE`] of an
    /// integer; a successful root is snapped to that integer.
    pub fn apply(self, value: f64) -> Result<f64, ExpressionError> {
        match self {
            UnaryOp::Square => check_real(value * value),
            UnaryOp::Sqrt => {
                if value < 0.0 {
                    return Err(ExpressionError::NegativeRoot(value));
                }
                let root = check_real(value.sqrt())?;
                let rounded = root.round();
                if (root - rounded).abs() < ROOT_TOLERANCE {
                    Ok(rounded)
                } else {
                    Err(ExpressionError::IrrationalRoot(value))
                }
            }
        }
    }

    pub fn build(self, operand: Expression) -> Expression {
        match self {
            UnaryOp::Square => Expression::Square(Box::new(operand)),
            UnaryOp::Sqrt => Expression::Sqrt(Box::new(operand)),
        }
    }
}
