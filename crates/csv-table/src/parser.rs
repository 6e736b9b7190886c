//! Parser for the quote-free CSV dialect
//!
//! The first line of a file is the header; every further line is one data
//! row. Fields are delimited by a single separator character with no
//! quoting, so a quote character has no special meaning. Lines end with
//! `\n` only: a carriage return before the `\n` is kept as trailing
//! content of the line's last field.

use crate::error::{Error, Result};
use crate::table::Table;

/// Parse CSV content from a string into a [`Table`] (useful for testing).
///
/// The returned table carries `separator` as its configured separator, so
/// a subsequent `save` writes the same dialect back out.
pub fn parse_str(content: &str, separator: char) -> Result<Table> {
    let (header, rows) = parse(content, separator)?;
    Ok(Table {
        separator,
        header,
        rows,
    })
}

/// Parse content into a header and data rows.
///
/// Every data line must split into exactly as many fields as the header
/// line; a line with more or fewer separator-delimited tokens fails the
/// whole parse with [`Error::SizeMismatch`] naming the data-row index.
pub(crate) fn parse(content: &str, separator: char) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut lines = lines(content);

    let header = match lines.next() {
        Some(line) => split_header(line, separator),
        None => Vec::new(),
    };

    // newline count is an upper bound on the number of data rows
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(content.matches('\n').count());
    for (idx, line) in lines.enumerate() {
        let row = split_row(line, separator);
        if row.len() != header.len() {
            return Err(Error::SizeMismatch {
                row: idx,
                expected: header.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }

    Ok((header, rows))
}

/// Iterate the `\n`-delimited lines of `content`.
///
/// Unlike [`str::lines`] this keeps carriage returns, and a trailing `\n`
/// on the final line does not yield an extra empty line.
fn lines(content: &str) -> std::str::Split<'_, char> {
    content.strip_suffix('\n').unwrap_or(content).split('\n')
}

/// Split the header line; an empty line means zero columns.
fn split_header(line: &str, separator: char) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    split_row(line, separator)
}

fn split_row(line: &str, separator: char) -> Vec<String> {
    line.split(separator).map(str::to_string).collect()
}
