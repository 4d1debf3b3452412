//! Tests for the conversion engine
//!
//! Covers each pipeline stage on its own and the assembled conversion.

pub mod convert_tests;

use crate::models::Grid;

/// Build a grid from string literals
pub fn grid(rows: &[&[&str]]) -> Grid {
    rows.iter()
        .map(|row| row.iter().map(|field| field.to_string()).collect())
        .collect()
}
