//! Isolation Forest — ensemble isolation-based outlier detector.
//!
//! Each tree isolates rows with random axis-aligned splits; rows that are
//! isolated in fewer splits are more anomalous. The per-row score is
//! `2^(−E[h(x)] / c(ψ))` where `h` is the path length over the ensemble
//! and `c(ψ)` the expected path length for the subsample size.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use sift_core::config::DetectorConfig;
use sift_core::errors::DetectError;
use sift_core::traits::{Detector, Verdict};

use super::threshold_by_contamination;

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Isolation-based detector. Seeded: the same input yields the same
/// forest, scores, and verdicts on every run.
pub struct IsolationForest {
    trees: usize,
    subsample: usize,
    contamination: f64,
    seed: u64,
}

impl IsolationForest {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            trees: config.effective_trees(),
            subsample: config.effective_subsample(),
            contamination: config.effective_contamination(),
            seed: config.effective_seed(),
        }
    }
}

impl Detector for IsolationForest {
    fn name(&self) -> &'static str {
        "isolation_forest"
    }

    fn fit_predict(&self, matrix: &[Vec<f64>]) -> Result<Vec<Verdict>, DetectError> {
        let forest = Forest::fit(matrix, self.trees, self.subsample, self.seed)?;
        let scores = forest.scores(matrix);
        tracing::debug!(
            rows = matrix.len(),
            trees = self.trees,
            subsample = forest.subsample,
            "Isolation forest fitted"
        );
        Ok(threshold_by_contamination(&scores, self.contamination))
    }
}

/// A fitted ensemble. Shared with the explainability capability, which
/// refits with the same seed and therefore sees the identical forest.
pub(crate) struct Forest {
    trees: Vec<Node>,
    subsample: usize,
    features: usize,
}

impl Forest {
    pub(crate) fn fit(
        matrix: &[Vec<f64>],
        trees: usize,
        subsample: usize,
        seed: u64,
    ) -> Result<Self, DetectError> {
        let rows = matrix.len();
        let features = matrix.first().map_or(0, Vec::len);
        if rows == 0 || features == 0 {
            return Err(DetectError::EmptyNumericSubset);
        }

        let psi = subsample.min(rows).max(1);
        // Beyond ~log2(ψ) splits the remaining depth carries no signal.
        let max_depth = ((psi as f64).log2().ceil() as usize).max(1);

        let mut rng = StdRng::seed_from_u64(seed);
        let built = (0..trees)
            .map(|_| {
                let sample = index::sample(&mut rng, rows, psi).into_vec();
                build_node(matrix, &sample, 0, max_depth, &mut rng)
            })
            .collect();

        Ok(Self {
            trees: built,
            subsample: psi,
            features,
        })
    }

    /// Anomaly score per row, in (0, 1]; higher is more anomalous.
    pub(crate) fn scores(&self, matrix: &[Vec<f64>]) -> Vec<f64> {
        let c = average_path_length(self.subsample);
        matrix
            .iter()
            .map(|row| {
                let total: f64 = self.trees.iter().map(|t| path_length(t, row, 0)).sum();
                let mean = total / self.trees.len() as f64;
                if c <= 0.0 {
                    0.5
                } else {
                    2f64.powf(-mean / c)
                }
            })
            .collect()
    }

    /// Per-feature isolation credit: every split contributes `2^−depth` to
    /// its feature, so early splits dominate. Raw weights, unnormalized.
    pub(crate) fn feature_attribution(&self) -> Vec<f64> {
        let mut credit = vec![0.0; self.features];
        for tree in &self.trees {
            accumulate_credit(tree, 0, &mut credit);
        }
        credit
    }
}

enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        size: usize,
    },
}

fn build_node(
    matrix: &[Vec<f64>],
    indices: &[usize],
    depth: usize,
    max_depth: usize,
    rng: &mut StdRng,
) -> Node {
    if indices.len() <= 1 || depth >= max_depth {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    // Split only on features with spread inside this node.
    let features = matrix[indices[0]].len();
    let mut candidates = Vec::new();
    for feature in 0..features {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &row in indices {
            let v = matrix[row][feature];
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if hi > lo {
            candidates.push((feature, lo, hi));
        }
    }
    if candidates.is_empty() {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    let (feature, lo, hi) = candidates[rng.gen_range(0..candidates.len())];
    let threshold = rng.gen_range(lo..hi);

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&row| matrix[row][feature] < threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_node(matrix, &left, depth + 1, max_depth, rng)),
        right: Box::new(build_node(matrix, &right, depth + 1, max_depth, rng)),
    }
}

fn path_length(node: &Node, row: &[f64], depth: usize) -> f64 {
    match node {
        Node::Leaf { size } => depth as f64 + average_path_length(*size),
        Node::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            if row[*feature] < *threshold {
                path_length(left, row, depth + 1)
            } else {
                path_length(right, row, depth + 1)
            }
        }
    }
}

fn accumulate_credit(node: &Node, depth: usize, credit: &mut [f64]) {
    if let Node::Split {
        feature,
        left,
        right,
        ..
    } = node
    {
        credit[*feature] += (0.5f64).powi(depth as i32);
        accumulate_credit(left, depth + 1, credit);
        accumulate_credit(right, depth + 1, credit);
    }
}

/// Expected path length of an unsuccessful BST search over `n` points:
/// `c(n) = 2·H(n−1) − 2(n−1)/n`, with the harmonic-number approximation
/// `H(i) ≈ ln(i) + γ` and the small-n cases pinned exactly.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}
