//! The four-stage pipeline: acquire → select → infer → export.
//!
//! Each run is an independent, isolated execution: the detector is refit
//! from scratch, nothing is cached, and the first unrecoverable error
//! discards the whole run. The only locally-recovered failure is an
//! unavailable explainability capability.

use std::path::PathBuf;

use serde::Serialize;
use sift_core::config::SiftConfig;
use sift_core::errors::PipelineError;
use sift_core::frame::Frame;
use sift_core::traits::{Attribution, Detector, Explainer};

use crate::detectors::{build_detector, ModelChoice};
use crate::explain::explainer_for;
use crate::export::{to_csv_bytes, RESULTS_FILENAME};
use crate::ingest;
use crate::label::apply_labels;
use crate::synthetic;

/// Input to a pipeline run.
#[derive(Debug, Clone)]
pub enum Input {
    /// An uploaded CSV, as raw bytes.
    Upload(Vec<u8>),
    /// An uploaded CSV, read from disk.
    UploadPath(PathBuf),
    /// No upload: fall back to the seeded synthetic sample.
    Synthetic,
}

/// The downloadable artifact produced by a run.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Everything a completed run produces.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The labeled result table.
    pub table: Frame,
    /// Aggregate feature attribution, when the capability was available.
    pub attribution: Option<Attribution>,
    /// The serialized result table, ready for download.
    pub artifact: Artifact,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub rows: usize,
    pub columns: usize,
    pub outliers: usize,
    pub model: String,
}

/// The anomaly-detection pipeline.
pub struct Pipeline {
    config: SiftConfig,
}

impl Pipeline {
    pub fn new(config: SiftConfig) -> Self {
        Self { config }
    }

    /// A pipeline with compiled defaults.
    pub fn with_defaults() -> Self {
        Self::new(SiftConfig::default())
    }

    /// A pipeline configured from `sift.toml` in `root`, if present.
    pub fn from_project_root(root: &std::path::Path) -> Result<Self, PipelineError> {
        Ok(Self::new(SiftConfig::load(root)?))
    }

    pub fn config(&self) -> &SiftConfig {
        &self.config
    }

    /// Run the full pipeline.
    ///
    /// Stages execute linearly and synchronously; any fatal stage error
    /// propagates and the run is discarded whole.
    pub fn run(&self, input: Input, choice: ModelChoice) -> Result<RunOutput, PipelineError> {
        let frame = self.acquire(input)?;
        tracing::info!(
            rows = frame.row_count(),
            columns = frame.column_count(),
            "Dataset acquired"
        );

        let detector = build_detector(choice, &self.config.detector);
        let matrix = frame.numeric_matrix();
        let verdicts = detector.fit_predict(&matrix)?;
        let outliers = verdicts.iter().filter(|v| v.is_outlier()).count();
        tracing::info!(model = %choice, detector = detector.name(), outliers, "Inference complete");

        let labeled = apply_labels(frame, &verdicts)?;
        let attribution = self.attribution(choice, &labeled);

        let bytes = to_csv_bytes(&labeled)?;
        let report = RunReport {
            rows: labeled.row_count(),
            columns: labeled.column_count(),
            outliers,
            model: choice.to_string(),
        };
        tracing::info!(
            rows = report.rows,
            outliers = report.outliers,
            artifact = RESULTS_FILENAME,
            "Run complete"
        );

        Ok(RunOutput {
            table: labeled,
            attribution,
            artifact: Artifact {
                filename: RESULTS_FILENAME,
                bytes,
            },
        })
    }

    fn acquire(&self, input: Input) -> Result<Frame, PipelineError> {
        match input {
            Input::Upload(bytes) => Ok(ingest::read_csv(bytes.as_slice())?),
            Input::UploadPath(path) => Ok(ingest::read_csv_path(&path)?),
            Input::Synthetic => Ok(synthetic::sample_frame_with(&self.config.synthetic)),
        }
    }

    /// Best-effort attribution. Absence of the capability, or a failure
    /// inside it, degrades to an informational skip.
    fn attribution(&self, choice: ModelChoice, frame: &Frame) -> Option<Attribution> {
        match explainer_for(choice, &self.config.detector) {
            Some(explainer) => match explainer.attribute(frame) {
                Ok(attribution) => Some(attribution),
                Err(e) => {
                    tracing::info!(error = %e, "Attribution skipped");
                    None
                }
            },
            None => {
                tracing::info!(model = %choice, "Explainability unavailable, skipping");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_report_serializes() {
        let report = RunReport {
            rows: 200,
            columns: 4,
            outliers: 10,
            model: ModelChoice::IsolationForest.to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"rows\":200"));
        assert!(json.contains("Isolation Forest"));
    }
}
