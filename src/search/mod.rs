//! Exhaustive search over dice combinations

mod combination;
mod config;
mod core;
mod coverage;
mod errors;
mod report;

pub use combination::{Combination, DICE_COUNT};
pub use config::{DEFAULT_FACES, DEFAULT_TARGET_MAX, SearchConfig};
pub use core::CombinationSearch;
pub use coverage::Coverage;
pub use errors::SearchError;
pub use report::SearchReport;

#[cfg(test)]
mod tests;
