use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::expression::Expression;
use crate::search::combination::Combination;

/// Targets reached by one combination, each with its simplest witness
#[derive(Debug, Clone)]
pub struct Coverage {
    combination: Combination,
    target_max: u32,
    witnesses: BTreeMap<u32, Expression>,
}

impl Coverage {
    pub fn new(combination: Combination, target_max: u32) -> Self {
        Self {
            combination,
            target_max,
            witnesses: BTreeMap::new(),
        }
    }

    /// Record `expr` as a way to reach `target`. The kept witness is the one
    /// with the fewest nodes, ties broken by canonical text, so the choice
    /// does not depend on enumeration order.
    pub fn record(&mut self, target: u32, expr: &Expression) {
        match self.witnesses.entry(target) {
            Entry::Vacant(slot) => {
                slot.insert(expr.clone());
            }
            Entry::Occupied(mut slot) => {
                let better = match expr.size().cmp(&slot.get().size()) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    Ordering::Equal => expr.to_string() < slot.get().to_string(),
                };
                if better {
                    slot.insert(expr.clone());
                }
            }
        }
    }

    pub fn combination(&self) -> Combination {
        self.combination
    }

    pub fn witness(&self, target: u32) -> Option<&Expression> {
        self.witnesses.get(&target)
    }

    pub fn witnesses(&self) -> &BTreeMap<u32, Expression> {
        &self.witnesses
    }

    pub fn found(&self) -> Vec<u32> {
        self.witnesses.keys().copied().collect()
    }

    pub fn missing(&self) -> Vec<u32> {
        (1..=self.target_max)
            .filter(|target| !self.witnesses.contains_key(target))
            .collect()
    }

    pub fn is_winning(&self) -> bool {
        (1..=self.target_max).all(|target| self.witnesses.contains_key(&target))
    }

    /// One line such as `(1, 1, 1): covers 9/19, missing: 6, 7, 8`
    pub fn summary(&self) -> String {
        let missing = self.missing();
        if missing.is_empty() {
            format!("{}: covers all {}", self.combination, self.target_max)
        } else {
            format!(
                "{}: covers {}/{}, missing: {}",
                self.combination,
                self.witnesses.len(),
                self.target_max,
                missing.iter().join(", ")
            )
        }
    }

    /// Indented `target = expression` lines
    pub fn witness_lines(&self) -> Vec<String> {
        self.witnesses
            .iter()
            .map(|(target, expr)| format!("  {} = {}", target, expr))
            .collect()
    }
}
