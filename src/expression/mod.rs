//! Expression trees over die faces: construction, rendering and evaluation

mod ast;
mod display;
mod errors;
mod eval;
mod ops;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use ops::{BinaryOp, ROOT_TOLERANCE, UnaryOp};
