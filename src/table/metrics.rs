//! Column metrics: effective column count and per-column widths.

use crate::models::{ColumnWidths, Row};

/// Minimum row length across the grid, `None` when the grid is empty
///
/// Only this many columns can be rendered while keeping the table
/// rectangular; later columns are dropped from every row.
pub fn effective_length(grid: &[Row]) -> Option<usize> {
    grid.iter().map(Vec::len).min()
}

/// Maximum trimmed width of each of the first `length` columns
pub fn column_widths(grid: &[Row], length: usize) -> ColumnWidths {
    let mut widths = vec![0; length];

    for row in grid {
        for (width, field) in widths.iter_mut().zip(row) {
            *width = (*width).max(field_width(field));
        }
    }

    widths
}

/// Width of a field as rendered: trimmed, counted in chars
pub fn field_width(field: &str) -> usize {
    trim_field(field).chars().count()
}

/// Strip ASCII blanks (` \t\n\r\0\x0B`) from both ends of a field
///
/// Other whitespace, such as a no-break space, is content.
pub fn trim_field(field: &str) -> &str {
    field.trim_matches([' ', '\t', '\n', '\r', '\0', '\x0B'])
}

/// Number of fields lying beyond the effective length
pub fn dropped_cells(grid: &[Row], length: usize) -> usize {
    grid.iter()
        .map(|row| row.len().saturating_sub(length))
        .sum()
}
