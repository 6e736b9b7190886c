//! csv-table: In-memory CSV table with one-shot load/save
//!
//! This library provides a single container type, [`Table`], that:
//! - Loads a CSV file into a header plus string-valued data rows
//! - Saves the table back out, one line per row
//! - Enforces that every row has exactly as many fields as the header
//!
//! The dialect is deliberately minimal: a single configurable separator
//! character, `\n` line endings, and no quoting or escaping. A field that
//! itself contains the separator or a newline will corrupt the file on
//! save; that is an accepted limitation of the format, not something the
//! writer papers over.

pub mod error;
pub mod parser;
pub mod table;

mod writer;

pub use error::{Error, Result};
pub use parser::parse_str;
pub use table::Table;
