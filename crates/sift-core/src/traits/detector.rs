//! The detector seam.

use serde::{Deserialize, Serialize};

use crate::errors::DetectError;

/// Per-row decision shared by every detector.
///
/// Detectors map their internal score orientation onto this enum, so
/// downstream consumers never see a raw library convention:
/// `Outlier` always means anomalous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Inlier,
    Outlier,
}

impl Verdict {
    pub fn is_outlier(&self) -> bool {
        matches!(self, Self::Outlier)
    }
}

/// An unsupervised outlier detector.
///
/// Fitting is full-batch and re-run from scratch on every invocation;
/// there is no model reuse across runs.
pub trait Detector {
    /// Detector name, for logs and reports.
    fn name(&self) -> &'static str;

    /// Fit on the row-major numeric matrix and produce one verdict per row.
    ///
    /// An empty matrix (zero rows or zero numeric columns) is invalid
    /// input and fails with [`DetectError::EmptyNumericSubset`].
    fn fit_predict(&self, matrix: &[Vec<f64>]) -> Result<Vec<Verdict>, DetectError>;
}
