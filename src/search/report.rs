use std::fmt;

use crate::search::combination::Combination;
use crate::search::coverage::Coverage;

/// Outcome of a full search
#[derive(Debug, Clone)]
pub struct SearchReport {
    coverages: Vec<Coverage>,
}

impl SearchReport {
    pub fn new(coverages: Vec<Coverage>) -> Self {
        Self { coverages }
    }

    /// Every searched combination, in enumeration order
    pub fn coverages(&self) -> &[Coverage] {
        &self.coverages
    }

    pub fn winners(&self) -> impl Iterator<Item = &Coverage> {
        self.coverages.iter().filter(|c| c.is_winning())
    }

    pub fn winning_combinations(&self) -> Vec<Combination> {
        self.winners().map(Coverage::combination).collect()
    }

    /// Line-oriented report; with `show_expressions` each winner is followed
    /// by one witness per target.
    pub fn render(&self, show_expressions: bool) -> String {
        let winners: Vec<&Coverage> = self.winners().collect();
        let mut lines = vec![format!("Total valid combinations: {}", winners.len())];

        for coverage in winners {
            lines.push(coverage.combination().to_string());
            if show_expressions {
                lines.extend(coverage.witness_lines());
            }
        }

        lines.join("\n")
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
