//! Core data structures for CSV to Markdown conversion.
//!
//! Defines the grid representation shared by every pipeline stage and the
//! report describing what a conversion kept, dropped, or skipped.

use serde::{Deserialize, Serialize};

/// One parsed line: an ordered sequence of fields
pub type Row = Vec<String>;

/// Parsed input: rows of fields, possibly ragged
pub type Grid = Vec<Row>;

/// Maximum trimmed width of each effective column
pub type ColumnWidths = Vec<usize>;

/// What happened to a transpose request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransposeOutcome {
    /// The caller did not ask for a transpose
    NotRequested,
    /// The grid had two rows and was transposed
    Applied,
    /// The grid had some other number of rows and was left unchanged
    Skipped { rows: usize },
}

impl TransposeOutcome {
    pub fn was_applied(&self) -> bool {
        matches!(self, TransposeOutcome::Applied)
    }
}

/// Summary of a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Data rows rendered below the header
    pub rows_rendered: usize,
    /// Effective column count (minimum row length)
    pub columns: usize,
    /// Width of each rendered column
    pub widths: ColumnWidths,
    /// Fields discarded because their row was longer than the effective length
    pub dropped_cells: usize,
    /// Blank rows removed from the end of the input
    pub trailing_blank_rows: usize,
    /// Result of the transpose request
    pub transpose: TransposeOutcome,
}

impl ConversionReport {
    /// Whether any input fields were left out of the table
    pub fn has_dropped_cells(&self) -> bool {
        self.dropped_cells > 0
    }

    /// Total rendered line count: header, separator and data rows
    pub fn line_count(&self) -> usize {
        self.rows_rendered + 2
    }
}

/// Rendered Markdown together with its report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub markdown: String,
    pub report: ConversionReport,
}
