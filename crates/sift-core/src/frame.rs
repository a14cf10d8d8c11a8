//! Column-oriented tabular data model.
//!
//! A `Frame` is an ordered set of equal-length columns, each numeric or
//! text. There is no declared schema: shape and types are whatever ingest
//! or the synthetic generator produced. Only numeric columns participate
//! in scoring; text columns are carried through unscored.

use serde::{Deserialize, Serialize};

use crate::errors::FrameError;

/// Values of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    fn truncated(&self, n: usize) -> Self {
        match self {
            Self::Numeric(v) => Self::Numeric(v.iter().take(n).copied().collect()),
            Self::Text(v) => Self::Text(v.iter().take(n).cloned().collect()),
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An ordered set of equal-length columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    /// Build a frame from columns. All columns must share one length.
    pub fn new(columns: Vec<Column>) -> Result<Self, FrameError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns[1..] {
                if column.len() != expected {
                    return Err(FrameError::LengthMismatch {
                        column: column.name().to_string(),
                        expected,
                        actual: column.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Append a column. Its length must match the current row count,
    /// unless the frame has no columns yet.
    pub fn push_column(&mut self, column: Column) -> Result<(), FrameError> {
        if !self.columns.is_empty() && column.len() != self.row_count() {
            return Err(FrameError::LengthMismatch {
                column: column.name().to_string(),
                expected: self.row_count(),
                actual: column.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Names of the numeric columns, in frame order.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.data().is_numeric())
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Row-major view over the numeric columns only.
    /// Empty when the frame has no numeric columns or no rows.
    pub fn numeric_matrix(&self) -> Vec<Vec<f64>> {
        let numeric: Vec<&[f64]> = self
            .columns
            .iter()
            .filter_map(|c| match c.data() {
                ColumnData::Numeric(v) => Some(v.as_slice()),
                ColumnData::Text(_) => None,
            })
            .collect();
        if numeric.is_empty() {
            return Vec::new();
        }
        (0..self.row_count())
            .map(|row| numeric.iter().map(|col| col[row]).collect())
            .collect()
    }

    /// The first `n` rows, as a new frame (preview).
    pub fn head(&self, n: usize) -> Frame {
        Frame {
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.name(), c.data().truncated(n)))
                .collect(),
        }
    }
}
