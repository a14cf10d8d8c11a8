//! Configuration for the Sift pipeline.
//!
//! Two layers: a project file (`sift.toml`) merged over compiled defaults.
//! The defaults are the pipeline's published constants, so a missing or
//! empty config file yields exactly the documented behavior.

pub mod detector_config;
pub mod sift_config;
pub mod synthetic_config;

pub use detector_config::DetectorConfig;
pub use sift_config::SiftConfig;
pub use synthetic_config::SyntheticConfig;

/// Seed shared by the detectors and the synthetic sample.
/// Reproducibility across runs is a stated contract, not an accident.
pub const DEFAULT_SEED: u64 = 42;

/// Assumed proportion of anomalous rows; calibrates the decision threshold.
pub const DEFAULT_CONTAMINATION: f64 = 0.05;

/// Trees in the isolation ensemble.
pub const DEFAULT_TREES: usize = 100;

/// Per-tree subsample ceiling for the isolation ensemble.
pub const DEFAULT_SUBSAMPLE: usize = 256;

/// Neighborhood size for the density-ratio detector.
pub const DEFAULT_NEIGHBORS: usize = 20;

/// Rows in the synthetic fallback sample.
pub const DEFAULT_SYNTHETIC_ROWS: usize = 200;
