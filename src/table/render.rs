//! Markdown pipe-table rendering.
//!
//! Every line starts and ends with the table separator, cells are padded
//! to their column width and separated by `" <sep> "`. The first grid row
//! becomes the header and is followed by a line of dashes.

use crate::constants::SEPARATOR_FILL;
use crate::error::{ConvertError, Result};
use crate::models::Row;
use crate::table::metrics::trim_field;

/// Render the grid as a Markdown table
///
/// Only the first `widths.len()` columns of each row are emitted, so every
/// row must hold at least `widths.len()` fields.
pub fn render(grid: &[Row], widths: &[usize], separator: &str) -> Result<String> {
    let (header, rows) = grid.split_first().ok_or(ConvertError::EmptyInput)?;

    let mut output = render_header(header, widths, separator);
    for row in rows {
        output.push_str(&render_row(row, widths, separator));
    }

    Ok(output)
}

/// Header line followed by the dash line
pub fn render_header(header: &[String], widths: &[usize], separator: &str) -> String {
    let mut output = render_row(header, widths, separator);
    output.push_str(&render_separator(widths, separator));
    output
}

/// One table line with trimmed, padded cells
///
/// `row` must hold at least `widths.len()` fields; extra fields are ignored.
pub fn render_row(row: &[String], widths: &[usize], separator: &str) -> String {
    debug_assert!(
        row.len() >= widths.len(),
        "row has {} fields but {} columns are rendered",
        row.len(),
        widths.len()
    );
    let cells = widths
        .iter()
        .zip(row)
        .map(|(&width, field)| padded(trim_field(field), width));
    frame(cells, separator)
}

/// Dash line sized to each column
pub fn render_separator(widths: &[usize], separator: &str) -> String {
    let cells = widths
        .iter()
        .map(|&width| SEPARATOR_FILL.to_string().repeat(width));
    frame(cells, separator)
}

/// Right-pad with spaces; a field wider than `width` is left as is
fn padded(field: &str, width: usize) -> String {
    let len = field.chars().count();
    if width < len {
        return field.to_string();
    }
    format!("{}{}", field, " ".repeat(width - len))
}

fn frame(cells: impl Iterator<Item = String>, separator: &str) -> String {
    let inner = format!(" {} ", separator);
    let cells: Vec<String> = cells.collect();
    format!("{sep} {} {sep}\n", cells.join(&inner), sep = separator)
}
