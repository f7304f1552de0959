//! Error types for vizframe-core
//!
//! Covers the recoverable conditions raised by table mutation and access:
//! - Structural preconditions (no columns, wrong value count)
//! - Value conversion failures
//! - Out-of-range column and row access
//! - Exhausted row identities

use thiserror::Error;

/// Errors raised by column and data frame operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataFrameError {
    /// Row insertion attempted on a frame without columns
    #[error("DataFrame has no columns")]
    NoColumns,

    /// Row width or header count does not match the column count
    #[error("Invalid column count: expected {expected}, got {actual}")]
    InvalidColCount { expected: usize, actual: usize },

    /// A string value could not be converted to the column's element type
    #[error("Cannot convert '{value}' to {expected} for column '{header}'")]
    DataTypeMismatch {
        header: String,
        value: String,
        expected: String,
    },

    /// Column position outside the frame
    #[error("Column index {index} out of range ({count} columns)")]
    ColumnIndexOutOfRange { index: usize, count: usize },

    /// Row outside a column or frame
    #[error("Row {row} out of range ({rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    /// Typed access with the wrong element type
    #[error("Type mismatch for column '{header}': expected {expected}, got {actual}")]
    TypeMismatch {
        header: String,
        expected: String,
        actual: String,
    },

    /// No identity above the current maximum is left
    #[error("Index column '{header}' has no free identity above u64::MAX")]
    IdentityOverflow { header: String },
}

impl DataFrameError {
    /// Build a conversion error for a column
    pub(crate) fn mismatch(header: &str, value: &str, expected: impl Into<String>) -> Self {
        DataFrameError::DataTypeMismatch {
            header: header.to_string(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

/// Result type alias for data frame operations
pub type DataFrameResult<T> = Result<T, DataFrameError>;
