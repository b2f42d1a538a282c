use log::trace;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::expression::{BinaryOp, Expression, UnaryOp};
use crate::utils::nearest_integer;

/// A reachable value together with the expression that produced it
#[derive(Debug, Clone)]
pub struct Candidate {
    pub value: f64,
    pub expr: Expression,
}

// Identity is the (value, expression) pair; value bits are compared exactly
// since equal trees always evaluate the same way.
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits() && self.expr == other.expr
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.expr.hash(state);
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expr, self.value)
    }
}

impl Candidate {
    pub fn literal(value: u32) -> Self {
        Self {
            value: f64::from(value),
            expr: Expression::Number(value),
        }
    }

    /// Applies a unary transform, or `None` when it is undefined for this value
    pub fn transform(&self, op: UnaryOp) -> Option<Self> {
        match op.apply(self.value) {
            Ok(value) => Some(Self {
                value,
                expr: op.build(self.expr.clone()),
            }),
            Err(e) => {
                trace!("Skipping {:?} of {}: {}", op, self.expr, e);
                None
            }
        }
    }

    /// Applies a binary operator, or `None` when it is undefined for these values
    pub fn combine(&self, op: BinaryOp, right: &Self) -> Option<Self> {
        match op.apply(self.value, right.value) {
            Ok(value) => Some(Self {
                value,
                expr: op.build(self.expr.clone(), right.expr.clone()),
            }),
            Err(e) => {
                trace!(
                    "Skipping {} {} {}: {}",
                    self.expr,
                    op.symbol(),
                    right.expr,
                    e
                );
                None
            }
        }
    }

    pub fn as_integer(&self, tolerance: f64) -> Option<i64> {
        nearest_integer(self.value, tolerance)
    }
}
