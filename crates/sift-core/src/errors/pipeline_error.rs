//! Pipeline errors.

use super::error_code::SiftErrorCode;
use super::{ConfigError, DetectError, ExportError, IngestError};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
///
/// Every variant is fatal to the run that raised it: there are no retries
/// and no partial results. A failed run is discarded whole.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Detection error: {0}")]
    Detect(#[from] DetectError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SiftErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.error_code(),
            Self::Detect(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_code;

    #[test]
    fn test_error_codes_delegate_to_subsystem() {
        let err: PipelineError = DetectError::EmptyNumericSubset.into();
        assert_eq!(err.error_code(), error_code::DETECT_ERROR);

        let err: PipelineError = IngestError::Empty.into();
        assert_eq!(err.error_code(), error_code::INGEST_ERROR);
    }

    #[test]
    fn test_display_includes_cause() {
        let err: PipelineError = DetectError::EmptyNumericSubset.into();
        assert!(err.to_string().contains("No numeric data"));
    }
}
