//! Outlier detectors — two strategies behind one trait.
//!
//! Both detectors rank rows by anomaly score and mark the top
//! `ceil(contamination × n)` as outliers, ties broken by row index, so
//! their verdicts are interchangeable for downstream consumers.

pub mod isolation_forest;
pub mod lof;

pub use isolation_forest::IsolationForest;
pub use lof::LocalOutlierFactor;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sift_core::config::DetectorConfig;
use sift_core::errors::DetectError;
use sift_core::traits::{Detector, Verdict};

/// The two supported model choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelChoice {
    IsolationForest,
    LocalOutlierFactor,
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsolationForest => write!(f, "Isolation Forest"),
            Self::LocalOutlierFactor => write!(f, "Local Outlier Factor"),
        }
    }
}

impl FromStr for ModelChoice {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Isolation Forest" => Ok(Self::IsolationForest),
            "Local Outlier Factor" => Ok(Self::LocalOutlierFactor),
            other => Err(DetectError::UnknownModel(other.to_string())),
        }
    }
}

/// Map a model choice onto a configured detector.
pub fn build_detector(choice: ModelChoice, config: &DetectorConfig) -> Box<dyn Detector> {
    match choice {
        ModelChoice::IsolationForest => Box::new(IsolationForest::new(config)),
        ModelChoice::LocalOutlierFactor => Box::new(LocalOutlierFactor::new(config)),
    }
}

/// Mark the top `ceil(contamination × n)` scores as outliers.
/// Higher score means more anomalous; ties break toward the earlier row.
pub(crate) fn threshold_by_contamination(scores: &[f64], contamination: f64) -> Vec<Verdict> {
    let n = scores.len();
    let outliers = ((contamination * n as f64).ceil() as usize).min(n);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

    let mut verdicts = vec![Verdict::Inlier; n];
    for &row in order.iter().take(outliers) {
        verdicts[row] = Verdict::Outlier;
    }
    verdicts
}
