//! sift-detect: the Sift anomaly-detection engine.
//!
//! One pipeline, four stages:
//! 1. **Acquire** — parse an uploaded CSV, or fall back to a seeded
//!    synthetic sample.
//! 2. **Select** — map a model choice onto a configured detector.
//! 3. **Infer** — fit the detector on the numeric columns and produce one
//!    inlier/outlier verdict per row.
//! 4. **Present & export** — append the label column, probe the optional
//!    explainability capability, and serialize the labeled table to a
//!    downloadable CSV artifact.
//!
//! Every run is independent: nothing is cached or persisted between runs.

pub mod detectors;
pub mod explain;
pub mod export;
pub mod ingest;
pub mod label;
pub mod pipeline;
pub mod synthetic;

// Re-exports for convenience
pub use detectors::{build_detector, IsolationForest, LocalOutlierFactor, ModelChoice};
pub use explain::explainer_for;
pub use export::{to_csv_bytes, RESULTS_FILENAME};
pub use ingest::{read_csv, read_csv_path};
pub use label::{apply_labels, LABEL_COLUMN, LABEL_INLIER, LABEL_OUTLIER};
pub use pipeline::{Artifact, Input, Pipeline, RunOutput, RunReport};
pub use synthetic::{sample_frame, sample_frame_with, SAMPLE_SEED};
