//! sift-core: core types for the Sift anomaly pipeline.
//!
//! This crate provides the shared foundation for Sift:
//! - Frame: column-oriented tabular data model
//! - Errors: one error enum per subsystem, stable error codes
//! - Config: TOML-backed configuration with compiled defaults
//! - Traits: the `Detector` and `Explainer` seams
//! - Telemetry: tracing bootstrap

pub mod config;
pub mod errors;
pub mod frame;
pub mod telemetry;
pub mod traits;

// Re-exports for convenience
pub use config::{DetectorConfig, SiftConfig, SyntheticConfig};
pub use errors::{
    ConfigError, DetectError, ExportError, FrameError, IngestError, PipelineError,
    SiftErrorCode,
};
pub use frame::{Column, ColumnData, Frame};
pub use traits::{Attribution, Detector, Explainer, Verdict};
