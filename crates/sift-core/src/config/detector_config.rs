//! Detector configuration.

use serde::{Deserialize, Serialize};

use super::{
    DEFAULT_CONTAMINATION, DEFAULT_NEIGHBORS, DEFAULT_SEED, DEFAULT_SUBSAMPLE, DEFAULT_TREES,
};

/// Configuration for the outlier detectors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectorConfig {
    /// Assumed anomalous fraction. Default: 0.05.
    pub contamination: Option<f64>,
    /// Seed for the isolation ensemble. Default: 42.
    pub seed: Option<u64>,
    /// Trees in the isolation ensemble. Default: 100.
    pub trees: Option<usize>,
    /// Per-tree subsample ceiling. Default: 256.
    pub subsample: Option<usize>,
    /// Neighborhood size for the density-ratio detector. Default: 20.
    pub neighbors: Option<usize>,
}

impl DetectorConfig {
    /// Returns the effective contamination fraction, defaulting to 0.05.
    pub fn effective_contamination(&self) -> f64 {
        self.contamination.unwrap_or(DEFAULT_CONTAMINATION)
    }

    /// Returns the effective seed, defaulting to 42.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Returns the effective tree count, defaulting to 100.
    pub fn effective_trees(&self) -> usize {
        self.trees.unwrap_or(DEFAULT_TREES)
    }

    /// Returns the effective subsample ceiling, defaulting to 256.
    pub fn effective_subsample(&self) -> usize {
        self.subsample.unwrap_or(DEFAULT_SUBSAMPLE)
    }

    /// Returns the effective neighborhood size, defaulting to 20.
    pub fn effective_neighbors(&self) -> usize {
        self.neighbors.unwrap_or(DEFAULT_NEIGHBORS)
    }
}
