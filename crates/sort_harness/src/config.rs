use stable_sort::{SortAlgorithm, all_algorithms};

use crate::{ALL_PATTERNS, DEFAULT_SEED, Pattern};

pub const DEFAULT_SIZES: [usize; 6] = [10, 100, 1_000, 10_000, 100_000, 1_000_000];

/// The cartesian product of cases a check run covers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckConfig {
    pub patterns: Vec<Pattern>,
    pub sizes: Vec<usize>,
    pub algorithms: Vec<SortAlgorithm>,
    pub seed: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            patterns: ALL_PATTERNS.to_vec(),
            sizes: DEFAULT_SIZES.to_vec(),
            algorithms: all_algorithms().to_vec(),
            seed: DEFAULT_SEED,
        }
    }
}

impl CheckConfig {
    pub fn case_count(&self) -> usize {
        self.patterns.len() * self.sizes.len() * self.algorithms.len()
    }
}
