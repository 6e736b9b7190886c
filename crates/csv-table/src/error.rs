//! Error types for csv-table

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in csv-table
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open a file for reading or writing
    #[error("failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error on an already-open file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row's field count disagrees with the header's
    #[error("row[{row}] has different size than header ({found} != {expected})")]
    SizeMismatch {
        /// Index of the data row (0 = first row after the header)
        row: usize,
        /// Field count of the header
        expected: usize,
        /// Field count of the offending row
        found: usize,
    },

    /// Row index beyond the row count
    #[error("row index {index} out of bounds (row count is {count})")]
    IndexOutOfBounds { index: usize, count: usize },
}
