//! csv2md Library
//!
//! Converts delimited tabular text into an aligned Markdown pipe-table.
//!
//! This library provides tools for:
//! - Splitting CSV text into a grid of fields with optional quote handling
//! - Transposing two-row input into a vertical code/value table
//! - Computing column widths over the rectangular part of the grid
//! - Rendering the grid as a padded Markdown table
//! - Loading conversion options from config files, environment and CLI
//!
//! ```
//! use csv2md::{ConvertOptions, convert};
//!
//! let markdown = convert("a,b\n1,2", &ConvertOptions::default()).unwrap();
//! assert_eq!(markdown, "| a | b |\n| - | - |\n| 1 | 2 |\n");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod table;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{Config, ConvertOptions, RawOptions};
pub use error::{ConvertError, Result};
pub use models::{ColumnWidths, Conversion, ConversionReport, Grid, Row, TransposeOutcome};
pub use table::{convert, convert_with_report};
