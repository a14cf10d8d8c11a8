//! Frame construction errors.

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur while building or extending a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Column {column} has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

impl SiftErrorCode for FrameError {
    fn error_code(&self) -> &'static str {
        error_code::FRAME_ERROR
    }
}
