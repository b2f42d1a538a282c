use std::ops::RangeInclusive;

use crate::generator::OperatorSet;
use crate::generator::constants::{DEFAULT_SQUARE_DEPTH, MAX_SQUARE_DEPTH};
use crate::search::errors::SearchError;
use crate::utils::DEFAULT_TOLERANCE;

pub const DEFAULT_FACES: u32 = 6;
pub const DEFAULT_TARGET_MAX: u32 = 19;

/// Parameters of a combination search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Dice show values `1..=faces`
    pub faces: u32,
    /// Targets are `1..=target_max`
    pub target_max: u32,
    /// Number of chained squarings applied to each value
    pub square_depth: usize,
    /// Absolute tolerance when classifying a value as an integer
    pub tolerance: f64,
    /// Enabled binary operators and unary transforms
    pub operators: OperatorSet,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            faces: DEFAULT_FACES,
            target_max: DEFAULT_TARGET_MAX,
            square_depth: DEFAULT_SQUARE_DEPTH,
            tolerance: DEFAULT_TOLERANCE,
            operators: OperatorSet::default(),
        }
    }
}

impl SearchConfig {
    /// # Errors
    ///
    /// Returns an error if the die has no faces, the target range is empty,
    /// the square depth is above [`MAX_SQUARE_DEPTH`], the tolerance is not
    /// strictly between 0 and 0.5, or no binary operator is enabled.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.faces == 0 {
            return Err(SearchError::NoFaces);
        }
        if self.target_max == 0 {
            return Err(SearchError::EmptyTargetRange);
        }
        if self.square_depth > MAX_SQUARE_DEPTH {
            return Err(SearchError::SquareDepthTooLarge {
                depth: self.square_depth,
                max: MAX_SQUARE_DEPTH,
            });
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 || self.tolerance >= 0.5 {
            return Err(SearchError::InvalidTolerance(self.tolerance));
        }
        // three dice can only be joined by binary operators
        if self.operators.binary.is_empty() {
            return Err(SearchError::NoBinaryOperators);
        }
        Ok(())
    }

    pub fn targets(&self) -> RangeInclusive<u32> {
        1..=self.target_max
    }
}
