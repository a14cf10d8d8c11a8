//! Best-effort explainability.
//!
//! The capability is probed, never assumed: it exists only when the crate
//! is built with the `explain` feature, and only the isolation forest
//! exposes attribution. An absent capability is reported to the caller as
//! `None`; the pipeline logs the skip and continues.

use sift_core::config::DetectorConfig;
use sift_core::traits::Explainer;

use crate::detectors::ModelChoice;

/// Capability probe. `None` means explainability is unavailable for this
/// choice and build; callers degrade gracefully.
#[cfg(feature = "explain")]
pub fn explainer_for(
    choice: ModelChoice,
    config: &DetectorConfig,
) -> Option<Box<dyn Explainer>> {
    match choice {
        ModelChoice::IsolationForest => {
            Some(Box::new(forest_attribution::ForestExplainer::new(config)))
        }
        ModelChoice::LocalOutlierFactor => None,
    }
}

/// Capability probe. Without the `explain` feature the capability is
/// never available.
#[cfg(not(feature = "explain"))]
pub fn explainer_for(
    _choice: ModelChoice,
    _config: &DetectorConfig,
) -> Option<Box<dyn Explainer>> {
    None
}

#[cfg(feature = "explain")]
mod forest_attribution {
    use sift_core::config::DetectorConfig;
    use sift_core::errors::DetectError;
    use sift_core::frame::Frame;
    use sift_core::traits::{Attribution, Explainer};

    use crate::detectors::isolation_forest::Forest;

    /// Attribution from a refit isolation forest. Fitting is seeded, so
    /// the explainer sees the identical forest the detector used.
    pub struct ForestExplainer {
        trees: usize,
        subsample: usize,
        seed: u64,
    }

    impl ForestExplainer {
        pub fn new(config: &DetectorConfig) -> Self {
            Self {
                trees: config.effective_trees(),
                subsample: config.effective_subsample(),
                seed: config.effective_seed(),
            }
        }
    }

    impl Explainer for ForestExplainer {
        fn name(&self) -> &'static str {
            "forest_attribution"
        }

        fn attribute(&self, frame: &Frame) -> Result<Attribution, DetectError> {
            let matrix = frame.numeric_matrix();
            let forest = Forest::fit(&matrix, self.trees, self.subsample, self.seed)?;
            let names = frame.numeric_column_names();
            let raw = names
                .into_iter()
                .zip(forest.feature_attribution())
                .collect();
            Ok(Attribution::new(raw))
        }
    }
}
