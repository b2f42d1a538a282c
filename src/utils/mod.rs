//! Utils module split into submodules

mod errors;
mod splits;
mod tolerance;
mod validation;

pub use errors::UtilsError;
pub use splits::binary_splits;
pub use tolerance::{DEFAULT_TOLERANCE, nearest_integer};
pub use validation::validate_dice;
