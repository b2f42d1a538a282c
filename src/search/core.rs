use log::{debug, info};
use rayon::prelude::*;

use crate::generator::ExpressionGenerator;
use crate::search::combination::{Combination, DICE_COUNT};
use crate::search::config::SearchConfig;
use crate::search::coverage::Coverage;
use crate::search::errors::SearchError;
use crate::search::report::SearchReport;
use crate::utils::validate_dice;

/// Exhaustive search over dice combinations
#[derive(Debug, Clone)]
pub struct CombinationSearch {
    config: SearchConfig,
    generator: ExpressionGenerator,
}

impl CombinationSearch {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let generator =
            ExpressionGenerator::with_operators(config.square_depth, config.operators.clone());
        debug!(
            "Generator uses square depth {} and operators {:?}",
            generator.square_depth(),
            generator.operators()
        );
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn combinations(&self) -> Vec<Combination> {
        Combination::all(self.config.faces)
    }

    /// Coverage of a caller-supplied combination
    ///
    /// # Errors
    ///
    /// Returns an error if any die lies outside the configured faces.
    pub fn analyze(&self, combination: &Combination) -> Result<Coverage, SearchError> {
        validate_dice(&combination.dice(), self.config.faces)?;
        Ok(self.coverage(combination))
    }

    /// Union of in-range integers over every distinct permutation
    pub fn coverage(&self, combination: &Combination) -> Coverage {
        let mut coverage = Coverage::new(*combination, self.config.target_max);
        let targets = self.config.targets();

        for permutation in combination.permutations() {
            for candidate in self.generator.generate(&permutation) {
                if let Some(value) = candidate.as_integer(self.config.tolerance)
                    && let Ok(target) = u32::try_from(value)
                    && targets.contains(&target)
                {
                    coverage.record(target, &candidate.expr);
                }
            }
        }

        debug!(
            "{} reaches {:?} of {} targets",
            combination,
            coverage.found(),
            self.config.target_max
        );
        coverage
    }

    /// Search every combination; results keep enumeration order
    pub fn run(&self) -> SearchReport {
        let combinations = self.combinations();
        info!(
            "Searching {} combinations of {} dice with {} faces",
            combinations.len(),
            DICE_COUNT,
            self.config.faces
        );

        let coverages: Vec<Coverage> = combinations
            .par_iter()
            .map(|combination| self.coverage(combination))
            .collect();

        let report = SearchReport::new(coverages);
        info!(
            "Found {} winning combinations",
            report.winning_combinations().len()
        );
        report
    }
}
