//! Error handling for CSV to Markdown conversion.
//!
//! Provides the failure kinds of the conversion engine plus the
//! configuration failures of the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input contains no rows: there is no header to render")]
    EmptyInput,

    #[error("CSV parsing error on line {line}: {source}")]
    CsvParsing {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConvertError {
    /// Create an invalid option error
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Create a CSV parsing error for a 1-based input line
    pub fn csv_parsing(line: usize, source: csv::Error) -> Self {
        Self::CsvParsing { line, source }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
