pub mod constants;
mod candidate;
mod core;
mod operators;

pub use candidate::Candidate;
pub use core::ExpressionGenerator;
pub use operators::OperatorSet;
