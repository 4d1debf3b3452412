//! Row and field splitting.
//!
//! Input is split into lines first and each line is read as one CSV
//! record, so a quoted field containing a line break is broken across two
//! rows. A quote that is never closed runs to the end of its line.

use csv::StringRecord;

use crate::config::ascii_byte;
use crate::error::{ConvertError, Result};
use crate::models::{Grid, Row};
use crate::table::metrics::trim_field;

/// Parse delimited text into a grid of fields
///
/// The delimiter and quote must be ASCII; the reader works on bytes.
pub fn parse(text: &str, delimiter: char, quote: Option<char>) -> Result<Grid> {
    let delimiter = ascii_byte("delimiter", delimiter)?;
    let quote = quote.map(|q| ascii_byte("enclosure", q)).transpose()?;

    split_lines(text)
        .enumerate()
        .map(|(index, line)| {
            split_fields(line, delimiter, quote)
                .map_err(|source| ConvertError::csv_parsing(index + 1, source))
        })
        .collect()
}

/// Split text on `\n`, dropping a `\r` that ends a line
///
/// A trailing newline yields a trailing empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Split one line into fields. Always yields at least one field.
///
/// `quote == None` turns quoting off, so the delimiter always separates.
pub fn split_fields(line: &str, delimiter: u8, quote: Option<u8>) -> csv::Result<Row> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .quote(quote.unwrap_or(b'"'))
        .quoting(quote.is_some())
        // Lines are already split; a lone `\r` is field data
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        // The reader skips empty lines
        return Ok(vec![String::new()]);
    }

    Ok(record.iter().map(str::to_string).collect())
}

/// Remove blank rows from the end of the grid, returning how many went
///
/// Blank rows elsewhere in the grid are kept.
pub fn drop_trailing_blank_rows(grid: &mut Grid) -> usize {
    let kept = grid
        .iter()
        .rposition(|row| !is_blank_row(row))
        .map_or(0, |last| last + 1);
    let dropped = grid.len() - kept;
    grid.truncate(kept);
    dropped
}

/// A single field that is empty after trimming, as an empty line parses
///
/// A record of several empty fields (`,` or `,,`) is data, not blank.
pub fn is_blank_row(row: &[String]) -> bool {
    matches!(row, [field] if trim_field(field).is_empty())
}
