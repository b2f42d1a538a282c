use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Square root of negative number: {0}")]
    NegativeRoot(f64),
    #[error("Square root of {0} is not an integer")]
    IrrationalRoot(f64),
    #[error("Non-real result")]
    NonRealResult,
    #[error("Result overflowed to infinity")]
    Overflow,
}
