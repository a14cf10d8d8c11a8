//! Local Outlier Factor — density-ratio outlier detector.
//!
//! A row whose local reachability density is low relative to the density
//! of its neighborhood scores above 1 and ranks as more anomalous.
//! Exact full-batch computation over all pairwise distances; the pipeline
//! refits per run on small tables, so O(n²) is acceptable.

use sift_core::config::DetectorConfig;
use sift_core::errors::DetectError;
use sift_core::traits::{Detector, Verdict};

use super::threshold_by_contamination;

/// Density-ratio detector over a k-nearest neighborhood.
pub struct LocalOutlierFactor {
    neighbors: usize,
    contamination: f64,
}

impl LocalOutlierFactor {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            neighbors: config.effective_neighbors(),
            contamination: config.effective_contamination(),
        }
    }
}

impl Detector for LocalOutlierFactor {
    fn name(&self) -> &'static str {
        "local_outlier_factor"
    }

    fn fit_predict(&self, matrix: &[Vec<f64>]) -> Result<Vec<Verdict>, DetectError> {
        let rows = matrix.len();
        let features = matrix.first().map_or(0, Vec::len);
        if rows == 0 || features == 0 {
            return Err(DetectError::EmptyNumericSubset);
        }
        if rows < 2 {
            return Err(DetectError::InsufficientRows { rows, required: 2 });
        }

        let k = self.neighbors.min(rows - 1).max(1);
        let scores = lof_scores(matrix, k);
        tracing::debug!(rows, k, "Local outlier factor fitted");
        Ok(threshold_by_contamination(&scores, self.contamination))
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

fn lof_scores(matrix: &[Vec<f64>], k: usize) -> Vec<f64> {
    let n = matrix.len();

    // Pairwise distances, then per-row neighbor order (distance, index).
    let mut dist = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = euclidean(&matrix[i], &matrix[j]);
            dist[i][j] = d;
            dist[j][i] = d;
        }
    }

    let mut k_distance = vec![0.0; n];
    let mut neighborhoods: Vec<Vec<usize>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut order: Vec<usize> = (0..n).filter(|&j| j != i).collect();
        order.sort_by(|&a, &b| dist[i][a].total_cmp(&dist[i][b]).then(a.cmp(&b)));
        k_distance[i] = dist[i][order[k - 1]];
        // The k-distance neighborhood keeps distance ties past the k-th.
        let neighborhood: Vec<usize> = order
            .into_iter()
            .take_while(|&j| dist[i][j] <= k_distance[i])
            .collect();
        neighborhoods.push(neighborhood);
    }

    // Local reachability density. A neighborhood of exact duplicates has
    // zero reachability mass; its density is treated as infinite.
    let mut lrd = vec![0.0; n];
    for i in 0..n {
        let reach_sum: f64 = neighborhoods[i]
            .iter()
            .map(|&j| k_distance[j].max(dist[i][j]))
            .sum();
        lrd[i] = if reach_sum > 0.0 {
            neighborhoods[i].len() as f64 / reach_sum
        } else {
            f64::INFINITY
        };
    }

    (0..n)
        .map(|i| {
            if lrd[i].is_infinite() {
                // Duplicate cluster: as dense as its neighbors, not an outlier.
                return 1.0;
            }
            let neighbor_density: f64 =
                neighborhoods[i].iter().map(|&j| lrd[j]).sum::<f64>()
                    / neighborhoods[i].len() as f64;
            neighbor_density / lrd[i]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lof_config() -> DetectorConfig {
        DetectorConfig::default()
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let detector = LocalOutlierFactor::new(&lof_config());
        assert!(matches!(
            detector.fit_predict(&[]),
            Err(DetectError::EmptyNumericSubset)
        ));
    }

    #[test]
    fn test_single_row_rejected() {
        let detector = LocalOutlierFactor::new(&lof_config());
        assert!(matches!(
            detector.fit_predict(&[vec![1.0]]),
            Err(DetectError::InsufficientRows { rows: 1, required: 2 })
        ));
    }

    #[test]
    fn test_distant_point_flagged() {
        // An 8×5 unit grid plus one far point. The cluster is larger than
        // the neighborhood size, so the far point's density stands out.
        let detector = LocalOutlierFactor::new(&lof_config());
        let mut matrix: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![(i % 8) as f64, (i / 8) as f64])
            .collect();
        matrix.push(vec![50.0, 50.0]);

        let verdicts = detector.fit_predict(&matrix).unwrap();
        // ceil(0.05 × 41) = 3 outliers; the far point must be among them.
        assert_eq!(verdicts.iter().filter(|v| v.is_outlier()).count(), 3);
        assert!(verdicts[40].is_outlier());
    }

    #[test]
    fn test_duplicate_rows_terminate() {
        let detector = LocalOutlierFactor::new(&lof_config());
        let matrix = vec![vec![2.0]; 10];
        let verdicts = detector.fit_predict(&matrix).unwrap();
        assert_eq!(verdicts.len(), 10);
        assert_eq!(verdicts.iter().filter(|v| v.is_outlier()).count(), 1);
    }

    #[test]
    fn test_lof_scores_near_one_for_uniform_cluster() {
        // Evenly spaced line: every point's density matches its neighbors'.
        let matrix: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
        let scores = lof_scores(&matrix, 3);
        for score in scores {
            assert!(score.is_finite());
            assert!(score > 0.5 && score < 2.5, "score = {score}");
        }
    }
}
