use crate::expression::BinaryOp;

/// Operators the generator may use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSet {
    pub binary: Vec<BinaryOp>,
    pub square: bool,
    pub sqrt: bool,
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self {
            binary: BinaryOp::ALL.to_vec(),
            square: true,
            sqrt: true,
        }
    }
}

impl OperatorSet {
    pub fn allows(&self, op: BinaryOp) -> bool {
        self.binary.contains(&op)
    }
}
