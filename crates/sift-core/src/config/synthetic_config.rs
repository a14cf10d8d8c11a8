//! Synthetic sample configuration.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_SEED, DEFAULT_SYNTHETIC_ROWS};

/// Configuration for the synthetic fallback sample.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Rows in the generated sample. Default: 200.
    pub rows: Option<usize>,
    /// Generator seed. Default: 42.
    pub seed: Option<u64>,
}

impl SyntheticConfig {
    /// Returns the effective row count, defaulting to 200.
    pub fn effective_rows(&self) -> usize {
        self.rows.unwrap_or(DEFAULT_SYNTHETIC_ROWS)
    }

    /// Returns the effective seed, defaulting to 42.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
