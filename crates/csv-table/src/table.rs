//! The in-memory CSV table container

use crate::error::{Error, Result};
use crate::{parser, writer};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// An in-memory CSV table: a header plus string-valued data rows.
///
/// All values are kept as text, exactly as they appear in the file. Every
/// row holds as many fields as the header; `add_row` and `load` enforce
/// this. The separator is fixed at construction and used for both reading
/// and writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Field separator
    pub(crate) separator: char,
    /// Column names, from the file's first line or `set_header`
    pub(crate) header: Vec<String>,
    /// Data rows, header excluded
    pub(crate) rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new empty table with the default `,` separator
    pub fn new() -> Self {
        Self::with_separator(',')
    }

    /// Create a new empty table with a custom field separator
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Get the configured field separator
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Preallocate storage for `row_count` data rows
    pub fn reserve(&mut self, row_count: usize) {
        self.rows.reserve(row_count);
    }

    /// Empty the header and all rows; the separator is kept
    pub fn clear(&mut self) {
        self.header.clear();
        self.rows.clear();
    }

    /// Replace the header wholesale.
    ///
    /// Rows already present are not re-validated against the new column
    /// count; only subsequent `add_row` calls check against it.
    pub fn set_header(&mut self, columns: Vec<String>) {
        self.header = columns;
    }

    /// Get the current header
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table holds neither a header nor any rows
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Append one data row.
    ///
    /// Fails with [`Error::SizeMismatch`] when the row's field count
    /// differs from the header's.
    pub fn add_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.header.len() {
            return Err(Error::SizeMismatch {
                row: self.rows.len(),
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Get the data row at `idx` (0 is the first row, not the header).
    ///
    /// Fails with [`Error::IndexOutOfBounds`] when `idx` is past the end.
    pub fn row(&self, idx: usize) -> Result<&[String]> {
        self.rows
            .get(idx)
            .map(Vec::as_slice)
            .ok_or(Error::IndexOutOfBounds {
                index: idx,
                count: self.rows.len(),
            })
    }

    /// Get all data rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Replace the table's contents by parsing the file at `path`.
    ///
    /// The swap is all-or-nothing: on any failure (open, read, or a row
    /// whose field count differs from the header's) the table keeps its
    /// previous contents.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

        let (header, rows) = parser::parse(&content, self.separator)?;
        self.header = header;
        self.rows = rows;
        Ok(())
    }

    /// Write the table to the file at `path`, truncating or creating it.
    ///
    /// Emits the header line, then every data row in order, each line
    /// `\n`-terminated. No quoting is applied.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut file = BufWriter::new(file);
        writer::write_to(&mut file, &self.header, &self.rows, self.separator)?;
        file.flush()?;
        Ok(())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
