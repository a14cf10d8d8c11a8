//! Detection errors.

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur during model selection and inference.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The numeric-column subset is empty: zero numeric columns, or zero
    /// rows to fit on. Invalid input, propagates.
    #[error("No numeric data available to score")]
    EmptyNumericSubset,

    #[error("Need at least {required} rows to fit, got {rows}")]
    InsufficientRows { rows: usize, required: usize },

    #[error("Detector produced {verdicts} verdicts for {rows} rows")]
    VerdictCountMismatch { rows: usize, verdicts: usize },

    #[error("Unknown model choice: {0}")]
    UnknownModel(String),
}

impl SiftErrorCode for DetectError {
    fn error_code(&self) -> &'static str {
        error_code::DETECT_ERROR
    }
}
