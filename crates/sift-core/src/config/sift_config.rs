//! Top-level Sift configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DetectorConfig, SyntheticConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Project config (`sift.toml` in the given root)
/// 2. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiftConfig {
    pub detector: DetectorConfig,
    pub synthetic: SyntheticConfig,
}

impl SiftConfig {
    /// Load configuration, merging `sift.toml` in `root` over defaults.
    /// A missing project file is not an error; a malformed one is.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("sift.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "Loaded project config");
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SiftConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SiftConfig) -> Result<(), ConfigError> {
        if let Some(contamination) = config.detector.contamination {
            if !(contamination > 0.0 && contamination <= 0.5) {
                return Err(ConfigError::ValidationFailed {
                    field: "detector.contamination".to_string(),
                    message: "must be in (0.0, 0.5]".to_string(),
                });
            }
        }
        if let Some(trees) = config.detector.trees {
            if trees == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "detector.trees".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(subsample) = config.detector.subsample {
            if subsample == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "detector.subsample".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(neighbors) = config.detector.neighbors {
            if neighbors == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "detector.neighbors".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(rows) = config.synthetic.rows {
            if rows == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "synthetic.rows".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SiftConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SiftConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut SiftConfig, other: &SiftConfig) {
        // Detector
        if other.detector.contamination.is_some() {
            base.detector.contamination = other.detector.contamination;
        }
        if other.detector.seed.is_some() {
            base.detector.seed = other.detector.seed;
        }
        if other.detector.trees.is_some() {
            base.detector.trees = other.detector.trees;
        }
        if other.detector.subsample.is_some() {
            base.detector.subsample = other.detector.subsample;
        }
        if other.detector.neighbors.is_some() {
            base.detector.neighbors = other.detector.neighbors;
        }

        // Synthetic
        if other.synthetic.rows.is_some() {
            base.synthetic.rows = other.synthetic.rows;
        }
        if other.synthetic.seed.is_some() {
            base.synthetic.seed = other.synthetic.seed;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
