//! Error handling for Sift.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detect_error;
pub mod error_code;
pub mod export_error;
pub mod frame_error;
pub mod ingest_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use detect_error::DetectError;
pub use error_code::SiftErrorCode;
pub use export_error::ExportError;
pub use frame_error::FrameError;
pub use ingest_error::IngestError;
pub use pipeline_error::PipelineError;
