use log::debug;
use rayon::prelude::*;
use std::collections::HashSet;

use crate::expression::{BinaryOp, UnaryOp};
use crate::utils::binary_splits;

use super::candidate::Candidate;
use super::constants::DEFAULT_SQUARE_DEPTH;
use super::operators::OperatorSet;

/// Enumerates every value reachable from an ordered operand sequence
#[derive(Debug, Clone)]
pub struct ExpressionGenerator {
    square_depth: usize,
    operators: OperatorSet,
}

impl ExpressionGenerator {
    pub fn new(square_depth: usize) -> Self {
        Self::with_operators(square_depth, OperatorSet::default())
    }

    pub fn with_operators(square_depth: usize, operators: OperatorSet) -> Self {
        Self {
            square_depth,
            operators,
        }
    }

    pub fn square_depth(&self) -> usize {
        self.square_depth
    }

    pub fn operators(&self) -> &OperatorSet {
        &self.operators
    }

    fn unary_ops(&self) -> impl Iterator<Item = UnaryOp> {
        [
            (UnaryOp::Square, self.operators.square),
            (UnaryOp::Sqrt, self.operators.sqrt),
        ]
        .into_iter()
        .filter_map(|(op, enabled)| enabled.then_some(op))
    }

    /// Generate every distinct (value, expression) pair reachable from
    /// `operands`, using each operand exactly once and in the given order.
    ///
    /// Undefined operations (division by zero, roots of negative or
    /// non-square values, overflow) drop the affected branch only.
    pub fn generate(&self, operands: &[u32]) -> Vec<Candidate> {
        let candidates = self.generate_set(operands);
        debug!(
            "Generated {} candidates for operands {:?}",
            candidates.len(),
            operands
        );
        candidates.into_iter().collect()
    }

    fn generate_set(&self, operands: &[u32]) -> HashSet<Candidate> {
        match operands {
            [] => HashSet::new(),
            [single] => self.literal_closure(*single),
            _ => {
                let mut results = HashSet::new();

                for (left_range, right_range) in binary_splits(operands.len()) {
                    let (Some(left_ops), Some(right_ops)) =
                        (operands.get(left_range), operands.get(right_range))
                    else {
                        continue;
                    };

                    let left = self.generate_set(left_ops);
                    let right = self.generate_set(right_ops);

                    let combined: Vec<Candidate> = left
                        .par_iter()
                        .flat_map_iter(|l| right.iter().flat_map(move |r| self.combine(l, r)))
                        .collect();

                    results.extend(combined);
                }

                results
            }
        }
    }

    /// Closure of a single die face under squaring and integral square roots.
    ///
    /// Each worklist entry remembers how many transforms produced it and is
    /// only expanded while that count is below the square depth.
    pub fn literal_closure(&self, value: u32) -> HashSet<Candidate> {
        let mut closure = HashSet::new();
        let mut worklist = vec![(Candidate::literal(value), 0usize)];

        while let Some((candidate, steps)) = worklist.pop() {
            if closure.contains(&candidate) {
                continue;
            }

            if steps < self.square_depth {
                for op in self.unary_ops() {
                    if let Some(next) = candidate.transform(op) {
                        worklist.push((next, steps + 1));
                    }
                }
            }

            closure.insert(candidate);
        }

        closure
    }

    /// The value itself, its square chain, and its square root when integral.
    /// Disabled transforms are left out.
    pub fn unary_variants(&self, base: Candidate) -> Vec<Candidate> {
        let root = if self.operators.sqrt {
            base.transform(UnaryOp::Sqrt)
        } else {
            None
        };
        let chain = if self.operators.square {
            self.square_depth
        } else {
            0
        };

        let mut variants = Vec::with_capacity(chain + 2);
        variants.push(base);
        for _ in 0..chain {
            let Some(next) = variants
                .last()
                .and_then(|c| c.transform(UnaryOp::Square))
            else {
                break;
            };
            variants.push(next);
        }
        variants.extend(root);

        variants
    }

    /// Every enabled binary operator applied to `left` and `right`, each
    /// result expanded through [`Self::unary_variants`]
    pub fn combine(&self, left: &Candidate, right: &Candidate) -> Vec<Candidate> {
        BinaryOp::ALL
            .into_iter()
            .filter(|&op| self.operators.allows(op))
            .filter_map(|op| left.combine(op, right))
            .flat_map(|base| self.unary_variants(base))
            .collect()
    }
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SQUARE_DEPTH)
    }
}
