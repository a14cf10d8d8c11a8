//! Verdict labeling — the appended `Anomaly` column.

use sift_core::errors::DetectError;
use sift_core::frame::{Column, ColumnData, Frame};
use sift_core::traits::Verdict;

/// Name of the appended label column.
pub const LABEL_COLUMN: &str = "Anomaly";
/// Label for an anomalous row.
pub const LABEL_OUTLIER: &str = "Yes";
/// Label for a normal row.
pub const LABEL_INLIER: &str = "No";

/// Append the label column: exactly one label per row, derived entirely
/// from the verdicts, never edited afterwards.
pub fn apply_labels(mut frame: Frame, verdicts: &[Verdict]) -> Result<Frame, DetectError> {
    let rows = frame.row_count();
    if rows != verdicts.len() {
        return Err(DetectError::VerdictCountMismatch {
            rows,
            verdicts: verdicts.len(),
        });
    }

    let labels: Vec<String> = verdicts
        .iter()
        .map(|v| {
            if v.is_outlier() {
                LABEL_OUTLIER.to_string()
            } else {
                LABEL_INLIER.to_string()
            }
        })
        .collect();

    frame
        .push_column(Column::new(LABEL_COLUMN, ColumnData::Text(labels)))
        .map_err(|_| DetectError::VerdictCountMismatch {
            rows,
            verdicts: verdicts.len(),
        })?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_frame() -> Frame {
        Frame::new(vec![Column::new(
            "x",
            ColumnData::Numeric(vec![1.0, 2.0]),
        )])
        .unwrap()
    }

    #[test]
    fn test_labels_map_verdicts() {
        let labeled =
            apply_labels(two_row_frame(), &[Verdict::Outlier, Verdict::Inlier]).unwrap();
        assert_eq!(labeled.column_count(), 2);
        match labeled.column(LABEL_COLUMN).unwrap().data() {
            ColumnData::Text(labels) => assert_eq!(labels, &["Yes", "No"]),
            ColumnData::Numeric(_) => unreachable!(),
        }
    }

    #[test]
    fn test_verdict_count_mismatch_rejected() {
        let err = apply_labels(two_row_frame(), &[Verdict::Inlier]).unwrap_err();
        assert!(matches!(
            err,
            DetectError::VerdictCountMismatch { rows: 2, verdicts: 1 }
        ));
    }
}
