//! Parameters of a generation run.

use crate::errors::ConfigError;
use crate::evolution::Mutator;
use serde::{Deserialize, Serialize};

/// Default fraction of positions planned for mutation.
pub const DEFAULT_ERROR_RATE: f64 = 0.01;
/// Default number of descendants generated in total.
pub const DEFAULT_COUNT: usize = 1000;

/// Options of a single batch generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Fraction of positions planned for mutation, in `[0, 1]`.
    pub error_rate: f64,
    /// Total number of descendants to emit across all haplotypes.
    pub count: usize,
    /// Keep only the first `truncate` bases of each source before mutating.
    /// `None` and `Some(0)` both disable truncation.
    pub truncate: Option<usize>,
    /// RNG seed. `None` gives a valid but non-reproducible run.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Create a configuration with no truncation and no seed.
    pub fn new(error_rate: f64, count: usize) -> Self {
        Self {
            error_rate,
            count,
            truncate: None,
            seed: None,
        }
    }

    pub fn with_truncate(mut self, truncate: Option<usize>) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Effective truncation length, ignoring a zero length.
    #[inline]
    pub fn effective_truncate(&self) -> Option<usize> {
        self.truncate.filter(|&t| t > 0)
    }

    /// Check the options that can be checked without looking at the input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_error_rate(self.error_rate)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_RATE, DEFAULT_COUNT)
    }
}

/// Reject error rates outside `[0, 1]`, including NaN.
pub fn validate_error_rate(error_rate: f64) -> Result<(), ConfigError> {
    Mutator::new(error_rate).map(drop)
}
