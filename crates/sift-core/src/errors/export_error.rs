//! Export errors.

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur while serializing the result table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Serialize(String),
}

impl SiftErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
