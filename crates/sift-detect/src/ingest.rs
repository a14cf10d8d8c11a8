//! Input acquisition — CSV upload parsing.
//!
//! Parsing is strict: ragged rows and unreadable content fail with an
//! [`IngestError`] that propagates to the caller. Column types are
//! inferred per column: a column is numeric iff every field parses as
//! `f64`, otherwise it is carried as text.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use sift_core::errors::IngestError;
use sift_core::frame::{Column, ColumnData, Frame};

/// Parse comma-separated tabular data with a header row into a frame.
pub fn read_csv<R: Read>(reader: R) -> Result<Frame, IngestError> {
    let mut rdr = ReaderBuilder::new().from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| IngestError::Malformed(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::Empty);
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in rdr.records() {
        let record = record.map_err(|e| IngestError::Malformed(e.to_string()))?;
        for (i, field) in record.iter().enumerate() {
            cells[i].push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column::new(name, infer_column(raw)))
        .collect();

    // Columns are same-length by construction; surface the invariant anyway.
    Frame::new(columns).map_err(|e| IngestError::Malformed(e.to_string()))
}

/// Parse a CSV file from disk.
pub fn read_csv_path(path: &Path) -> Result<Frame, IngestError> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// A column is numeric iff every field parses as `f64`.
fn infer_column(raw: Vec<String>) -> ColumnData {
    let mut numeric = Vec::with_capacity(raw.len());
    for field in &raw {
        match field.trim().parse::<f64>() {
            Ok(value) => numeric.push(value),
            Err(_) => return ColumnData::Text(raw),
        }
    }
    ColumnData::Numeric(numeric)
}
