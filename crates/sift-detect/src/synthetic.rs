//! Synthetic fallback sample.
//! Deterministic: same seed → same frame, bit for bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use sift_core::config::SyntheticConfig;
use sift_core::frame::{Column, ColumnData, Frame};

/// Seed for the fallback sample. Reproducibility is a stated contract.
pub const SAMPLE_SEED: u64 = 42;

const AMOUNT_MEAN: f64 = 100.0;
const AMOUNT_STD: f64 = 20.0;

/// Generate the default sample: 200 rows, seed 42, three numeric columns.
pub fn sample_frame() -> Frame {
    sample_frame_with(&SyntheticConfig::default())
}

/// Generate a sample with explicit row count and seed.
///
/// Columns, drawn one at a time in order:
/// - `transaction_amount`: Normal(100, 20)
/// - `transaction_time`: uniform integer in [0, 24)
/// - `merchant_id`: uniform integer in [1, 50]
pub fn sample_frame_with(config: &SyntheticConfig) -> Frame {
    let rows = config.effective_rows();
    let mut rng = StdRng::seed_from_u64(config.effective_seed());

    let amount = Normal::new(AMOUNT_MEAN, AMOUNT_STD)
        .expect("constant distribution parameters are valid");
    let amounts: Vec<f64> = (0..rows).map(|_| amount.sample(&mut rng)).collect();
    let times: Vec<f64> = (0..rows).map(|_| rng.gen_range(0..24) as f64).collect();
    let merchants: Vec<f64> = (0..rows).map(|_| rng.gen_range(1..=50) as f64).collect();

    Frame::new(vec![
        Column::new("transaction_amount", ColumnData::Numeric(amounts)),
        Column::new("transaction_time", ColumnData::Numeric(times)),
        Column::new("merchant_id", ColumnData::Numeric(merchants)),
    ])
    .expect("generated columns share a length")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::frame::ColumnData;

    #[test]
    fn test_shape_and_columns() {
        let frame = sample_frame();
        assert_eq!(frame.row_count(), 200);
        assert_eq!(
            frame.column_names(),
            vec!["transaction_amount", "transaction_time", "merchant_id"]
        );
        assert!(frame.columns().iter().all(|c| c.data().is_numeric()));
    }

    #[test]
    fn test_deterministic_across_invocations() {
        assert_eq!(sample_frame(), sample_frame());
    }

    #[test]
    fn test_seed_changes_output() {
        let other = sample_frame_with(&SyntheticConfig {
            seed: Some(43),
            ..Default::default()
        });
        assert_ne!(sample_frame(), other);
    }

    #[test]
    fn test_integer_columns_within_bounds() {
        let frame = sample_frame();
        let ints = |name: &str| match frame.column(name).unwrap().data() {
            ColumnData::Numeric(v) => v.clone(),
            ColumnData::Text(_) => unreachable!(),
        };
        for t in ints("transaction_time") {
            assert_eq!(t, t.trunc());
            assert!((0.0..24.0).contains(&t));
        }
        for m in ints("merchant_id") {
            assert_eq!(m, m.trunc());
            assert!((1.0..=50.0).contains(&m));
        }
    }

    #[test]
    fn test_row_count_override() {
        let frame = sample_frame_with(&SyntheticConfig {
            rows: Some(17),
            ..Default::default()
        });
        assert_eq!(frame.row_count(), 17);
    }
}
