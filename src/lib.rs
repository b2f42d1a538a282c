//! Dice Knockout - which three dice can be combined into every number from 1 to 19?
//!
//! Each die face may be used once per expression, combined with `+ - * /`,
//! squaring and integral square roots. This library enumerates every value
//! reachable from an ordered sequence of faces and searches all dice
//! combinations for those that reach every target.

pub mod expression;
pub mod generator;
pub mod search;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use generator::{Candidate, ExpressionGenerator, OperatorSet};
pub use search::{
    Combination, CombinationSearch, Coverage, SearchConfig, SearchError, SearchReport,
};
pub use utils::{UtilsError, validate_dice};

/// Generate every reachable (value, expression) pair for an ordered sequence
/// of operands, using the default square chain depth.
///
/// # Examples
///
/// ```
/// use dice_knockout::generate_expressions;
///
/// let candidates = generate_expressions(&[5, 2]);
/// assert!(candidates.iter().any(|c| c.value == 3.0));
/// ```
pub fn generate_expressions(operands: &[u32]) -> Vec<Candidate> {
    ExpressionGenerator::default().generate(operands)
}

/// Search every three-dice combination with the default configuration and
/// return the winners in ascending order.
///
/// # Errors
///
/// Returns an error if the default configuration fails validation.
///
/// # Examples
///
/// ```no_run
/// use dice_knockout::find_winning_combinations;
///
/// match find_winning_combinations() {
///     Ok(winners) => println!("{} winning combinations", winners.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_winning_combinations() -> Result<Vec<Combination>, SearchError> {
    let search = CombinationSearch::new(SearchConfig::default())?;
    Ok(search.run().winning_combinations())
}
