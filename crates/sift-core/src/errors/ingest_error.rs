//! Input acquisition errors.

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur while acquiring a dataset.
///
/// A malformed upload is fatal to the run: it propagates to the caller
/// and is never recovered.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Malformed(String),

    #[error("Upload contains no columns")]
    Empty,
}

impl SiftErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        error_code::INGEST_ERROR
    }
}
