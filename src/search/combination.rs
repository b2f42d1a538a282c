use itertools::Itertools;
use std::fmt;

use crate::search::errors::SearchError;

pub const DICE_COUNT: usize = 3;

/// An unordered roll of three dice, stored sorted ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination([u32; DICE_COUNT]);

impl Combination {
    pub fn new(mut dice: [u32; DICE_COUNT]) -> Self {
        dice.sort_unstable();
        Self(dice)
    }

    /// # Errors
    ///
    /// Returns an error unless exactly [`DICE_COUNT`] values are given.
    pub fn from_slice(values: &[u32]) -> Result<Self, SearchError> {
        let dice: [u32; DICE_COUNT] = values.try_into().map_err(|_| SearchError::WrongDiceCount {
            expected: DICE_COUNT,
            actual: values.len(),
        })?;
        Ok(Self::new(dice))
    }

    pub fn dice(&self) -> [u32; DICE_COUNT] {
        self.0
    }

    /// Every sorted combination over `1..=faces`, in lexicographic order
    pub fn all(faces: u32) -> Vec<Self> {
        (1..=faces)
            .combinations_with_replacement(DICE_COUNT)
            .filter_map(|dice| <[u32; DICE_COUNT]>::try_from(dice).ok())
            .map(Self)
            .collect()
    }

    /// Distinct orderings of the dice; repeated faces yield fewer than six
    pub fn permutations(&self) -> Vec<Vec<u32>> {
        self.0
            .iter()
            .copied()
            .permutations(DICE_COUNT)
            .unique()
            .collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}
