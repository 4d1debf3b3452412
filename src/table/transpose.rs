//! Two-row transpose.
//!
//! A grid of exactly two rows (a header line and a value line, say) reads
//! badly as a wide table. Transposing turns it into one row per column,
//! under a synthetic `code` / `value` header.

use crate::constants::{TRANSPOSE_HEADER, TRANSPOSE_ROW_COUNT};
use crate::models::{Grid, TransposeOutcome};

/// Transpose the grid when requested and it has exactly two rows
///
/// Any other row count leaves the grid untouched.
pub fn transpose_pair(grid: Grid, requested: bool) -> (Grid, TransposeOutcome) {
    if !requested {
        return (grid, TransposeOutcome::NotRequested);
    }

    if grid.len() != TRANSPOSE_ROW_COUNT {
        let rows = grid.len();
        return (grid, TransposeOutcome::Skipped { rows });
    }

    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut transposed: Grid = Vec::with_capacity(width + 1);
    transposed.push(TRANSPOSE_HEADER.iter().map(|s| s.to_string()).collect());
    transposed.extend(transpose(grid));

    (transposed, TransposeOutcome::Applied)
}

/// Swap rows and columns
///
/// Output row `j` holds field `j` of every input row that has one, so
/// ragged input gives ragged output.
pub fn transpose(grid: Grid) -> Grid {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut out: Grid = (0..width).map(|_| Vec::with_capacity(grid.len())).collect();

    for row in grid {
        for (column, field) in row.into_iter().enumerate() {
            out[column].push(field);
        }
    }

    out
}
