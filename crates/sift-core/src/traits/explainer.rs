//! The explainability capability seam.
//!
//! Explainability is optional: the pipeline probes for a capability and
//! degrades to a no-op when none is available. Absence is informational,
//! never an error.

use serde::{Deserialize, Serialize};

use crate::errors::DetectError;
use crate::frame::Frame;

/// Aggregate feature attribution over the numeric columns.
///
/// Entries are (column name, weight), sorted by descending weight with
/// ties broken by frame order; weights sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    entries: Vec<(String, f64)>,
}

impl Attribution {
    /// Normalize and sort raw per-column weights.
    /// All-zero weights degrade to a uniform attribution.
    pub fn new(raw: Vec<(String, f64)>) -> Self {
        let total: f64 = raw.iter().map(|(_, w)| w.max(0.0)).sum();
        let uniform = 1.0 / raw.len().max(1) as f64;
        let mut entries: Vec<(String, f64)> = raw
            .into_iter()
            .map(|(name, w)| {
                let weight = if total > 0.0 { w.max(0.0) / total } else { uniform };
                (name, weight)
            })
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// The highest-weighted column, if any.
    pub fn top(&self) -> Option<&(String, f64)> {
        self.entries.first()
    }
}

/// A capability that attributes detector decisions to input columns.
pub trait Explainer {
    /// Capability name, for logs.
    fn name(&self) -> &'static str;

    /// Compute aggregate attribution over the frame's numeric columns.
    fn attribute(&self, frame: &Frame) -> Result<Attribution, DetectError>;
}
