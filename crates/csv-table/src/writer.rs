//! Emission of the quote-free CSV dialect
//!
//! Each line is the fields joined by the separator followed by `\n`. No
//! quoting or escaping is ever applied, so a field containing the
//! separator or a newline produces a file that will not load back
//! structurally intact. Preserving that limitation is deliberate.

use crate::error::Result;
use std::io::Write;

/// Write the header line followed by every data row.
///
/// A completely empty table (no header, no rows) writes nothing, leaving
/// the destination file empty.
pub(crate) fn write_to<W: Write>(
    writer: &mut W,
    header: &[String],
    rows: &[Vec<String>],
    separator: char,
) -> Result<()> {
    if header.is_empty() && rows.is_empty() {
        return Ok(());
    }

    let separator = separator.to_string();
    write_line(writer, header, &separator)?;
    for row in rows {
        write_line(writer, row, &separator)?;
    }
    Ok(())
}

fn write_line<W: Write>(writer: &mut W, fields: &[String], separator: &str) -> Result<()> {
    writeln!(writer, "{}", fields.join(separator))?;
    Ok(())
}
