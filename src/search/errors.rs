use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Die must have at least one face")]
    NoFaces,
    #[error("Target range must contain at least one value")]
    EmptyTargetRange,
    #[error("Square depth {depth} exceeds the maximum of {max}")]
    SquareDepthTooLarge { depth: usize, max: usize },
    #[error("Tolerance must lie strictly between 0 and 0.5, got {0}")]
    InvalidTolerance(f64),
    #[error("At least one binary operator must be enabled")]
    NoBinaryOperators,
    #[error("Expected {expected} dice, got {actual}")]
    WrongDiceCount { expected: usize, actual: usize },
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
