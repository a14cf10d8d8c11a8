//! Result-table export.

use csv::Writer;
use sift_core::errors::ExportError;
use sift_core::frame::{ColumnData, Frame};

/// Download filename for the labeled result table.
pub const RESULTS_FILENAME: &str = "anomaly_results.csv";

/// Serialize a frame to UTF-8 comma-separated bytes: one header row, one
/// record per data row, all columns in frame order.
pub fn to_csv_bytes(frame: &Frame) -> Result<Vec<u8>, ExportError> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(frame.column_names())
        .map_err(|e| ExportError::Serialize(e.to_string()))?;

    for row in 0..frame.row_count() {
        let record: Vec<String> = frame
            .columns()
            .iter()
            .map(|column| match column.data() {
                ColumnData::Numeric(values) => values[row].to_string(),
                ColumnData::Text(values) => values[row].clone(),
            })
            .collect();
        wtr.write_record(&record)
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
    }

    wtr.into_inner()
        .map_err(|e| ExportError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::frame::Column;

    #[test]
    fn test_header_and_rows() {
        let frame = Frame::new(vec![
            Column::new("x", ColumnData::Numeric(vec![1.0, 2.5])),
            Column::new("Anomaly", ColumnData::Text(vec!["No".into(), "Yes".into()])),
        ])
        .unwrap();

        let bytes = to_csv_bytes(&frame).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "x,Anomaly\n1,No\n2.5,Yes\n");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let frame = Frame::new(vec![Column::new(
            "note",
            ColumnData::Text(vec!["a,b".into()]),
        )])
        .unwrap();
        let text = String::from_utf8(to_csv_bytes(&frame).unwrap()).unwrap();
        assert_eq!(text, "note\n\"a,b\"\n");
    }

    #[test]
    fn test_empty_frame_exports_header_only() {
        let frame = Frame::new(vec![Column::new("x", ColumnData::Numeric(vec![]))]).unwrap();
        let text = String::from_utf8(to_csv_bytes(&frame).unwrap()).unwrap();
        assert_eq!(text, "x\n");
    }
}
