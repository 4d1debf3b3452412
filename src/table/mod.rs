//! Conversion engine.
//!
//! Runs the pipeline text → grid → (transposed) grid → column metrics →
//! Markdown. Each stage is a free function in its own module; nothing is
//! kept between calls and the engine never logs or touches I/O.

pub mod metrics;
pub mod render;
pub mod splitter;
pub mod transpose;

#[cfg(test)]
pub mod tests;

use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::models::{Conversion, ConversionReport};

/// Convert delimited text into a Markdown table
pub fn convert(text: &str, options: &ConvertOptions) -> Result<String> {
    convert_with_report(text, options).map(|conversion| conversion.markdown)
}

/// Convert delimited text and describe what was kept and dropped
///
/// Fails with [`ConvertError::InvalidOption`] before parsing when the
/// options are inconsistent, and with [`ConvertError::EmptyInput`] when no
/// rows remain once trailing blank lines are removed.
pub fn convert_with_report(text: &str, options: &ConvertOptions) -> Result<Conversion> {
    options.validate()?;

    let mut grid = splitter::parse(text, options.delimiter, options.enclosure)?;
    let trailing_blank_rows = splitter::drop_trailing_blank_rows(&mut grid);

    let (grid, transpose) = transpose::transpose_pair(grid, options.transpose);

    let columns = metrics::effective_length(&grid).ok_or(ConvertError::EmptyInput)?;
    let widths = metrics::column_widths(&grid, columns);
    let dropped_cells = metrics::dropped_cells(&grid, columns);

    let markdown = render::render(&grid, &widths, &options.table_separator)?;

    Ok(Conversion {
        markdown,
        report: ConversionReport {
            rows_rendered: grid.len() - 1,
            columns,
            widths,
            dropped_cells,
            trailing_blank_rows,
            transpose,
        },
    })
}
