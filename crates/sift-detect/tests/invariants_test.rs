//! Property tests for the labeling invariants.

use proptest::prelude::*;
use sift_core::config::DetectorConfig;
use sift_core::frame::{Column, ColumnData, Frame};
use sift_core::traits::Detector;
use sift_detect::{apply_labels, build_detector, ModelChoice, LABEL_COLUMN};

fn numeric_frame() -> impl Strategy<Value = Frame> {
    (1usize..=3, 1usize..=40).prop_flat_map(|(cols, rows)| {
        proptest::collection::vec(
            proptest::collection::vec(-1e6f64..1e6f64, rows..=rows),
            cols..=cols,
        )
        .prop_map(|columns| {
            Frame::new(
                columns
                    .into_iter()
                    .enumerate()
                    .map(|(i, values)| {
                        Column::new(format!("c{i}"), ColumnData::Numeric(values))
                    })
                    .collect(),
            )
            .expect("generated columns share a length")
        })
    })
}

proptest! {
    /// Labeling any numeric frame preserves the row count, adds exactly
    /// one column, and draws labels only from {"Yes", "No"}; the flagged
    /// count is exactly ceil(contamination × rows).
    #[test]
    fn prop_labeling_preserves_shape(frame in numeric_frame()) {
        let config = DetectorConfig::default();
        let detector = build_detector(ModelChoice::IsolationForest, &config);
        let verdicts = detector.fit_predict(&frame.numeric_matrix()).unwrap();
        let labeled = apply_labels(frame.clone(), &verdicts).unwrap();

        prop_assert_eq!(labeled.row_count(), frame.row_count());
        prop_assert_eq!(labeled.column_count(), frame.column_count() + 1);

        let labels = match labeled.column(LABEL_COLUMN).unwrap().data() {
            ColumnData::Text(values) => values.clone(),
            ColumnData::Numeric(_) => unreachable!("label column is text"),
        };
        prop_assert!(labels.iter().all(|l| l == "Yes" || l == "No"));

        let rows = frame.row_count();
        let expected = ((config.effective_contamination() * rows as f64).ceil() as usize).min(rows);
        prop_assert_eq!(labels.iter().filter(|l| *l == "Yes").count(), expected);
    }

    /// Detection is deterministic: refitting on the same frame yields the
    /// same verdicts.
    #[test]
    fn prop_refit_is_deterministic(frame in numeric_frame()) {
        let config = DetectorConfig::default();
        let detector = build_detector(ModelChoice::IsolationForest, &config);
        let matrix = frame.numeric_matrix();
        prop_assert_eq!(
            detector.fit_predict(&matrix).unwrap(),
            detector.fit_predict(&matrix).unwrap()
        );
    }
}
