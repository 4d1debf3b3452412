//! Configuration management and validation.
//!
//! Provides the typed conversion options consumed by the engine, the
//! string-typed form they arrive in from files, environment and command
//! line, and the layered loader that merges those sources.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DELIMITER, DEFAULT_ENCLOSURE,
    DEFAULT_TABLE_SEPARATOR, env_vars,
};
use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options controlling a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Field delimiter
    pub delimiter: char,

    /// Quote character; `None` disables quote-aware splitting
    pub enclosure: Option<char>,

    /// Markdown column delimiter, one or more characters
    pub table_separator: String,

    /// Transpose a two-row grid into a code/value table
    pub transpose: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            enclosure: Some(DEFAULT_ENCLOSURE),
            table_separator: DEFAULT_TABLE_SEPARATOR.to_string(),
            transpose: false,
        }
    }
}

impl ConvertOptions {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_enclosure(mut self, enclosure: char) -> Self {
        self.enclosure = Some(enclosure);
        self
    }

    /// Disable quote-aware splitting
    pub fn without_enclosure(mut self) -> Self {
        self.enclosure = None;
        self
    }

    /// Set the Markdown column delimiter
    pub fn with_table_separator(mut self, separator: impl Into<String>) -> Self {
        self.table_separator = separator.into();
        self
    }

    /// Request the two-row transpose
    pub fn with_transpose(mut self, transpose: bool) -> Self {
        self.transpose = transpose;
        self
    }

    /// Check the options describe a table that can be parsed and rendered
    pub fn validate(&self) -> Result<()> {
        ascii_byte("delimiter", self.delimiter)?;
        if is_line_break(self.delimiter) {
            return Err(ConvertError::invalid_option(
                "delimiter",
                "a line break cannot separate fields",
            ));
        }

        if let Some(enclosure) = self.enclosure {
            ascii_byte("enclosure", enclosure)?;
            if enclosure == self.delimiter {
                return Err(ConvertError::invalid_option(
                    "enclosure",
                    format!("must differ from the delimiter '{}'", self.delimiter),
                ));
            }
            if is_line_break(enclosure) {
                return Err(ConvertError::invalid_option(
                    "enclosure",
                    "a line break cannot quote fields",
                ));
            }
        }

        if self.table_separator.is_empty() {
            return Err(ConvertError::invalid_option(
                "table_separator",
                "must contain at least one character",
            ));
        }

        if self.table_separator.chars().any(is_line_break) {
            return Err(ConvertError::invalid_option(
                "table_separator",
                "must not contain a line break",
            ));
        }

        Ok(())
    }
}

/// Byte value of a delimiter or quote; the CSV reader only takes ASCII
pub fn ascii_byte(option: &str, c: char) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            ConvertError::invalid_option(option, format!("'{c}' is not an ASCII character"))
        })
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Options as they arrive from a config file, the environment or the CLI
///
/// Every field is optional so that layers can be merged; `resolve` applies
/// the defaults and turns the strings into [`ConvertOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    pub delimiter: Option<String>,
    pub enclosure: Option<String>,
    pub separator: Option<String>,
    pub transpose: Option<bool>,
}

impl RawOptions {
    /// Overlay `other` on top of `self`; values set in `other` win
    pub fn merge(mut self, other: RawOptions) -> Self {
        if other.delimiter.is_some() {
            self.delimiter = other.delimiter;
        }
        if other.enclosure.is_some() {
            self.enclosure = other.enclosure;
        }
        if other.separator.is_some() {
            self.separator = other.separator;
        }
        if other.transpose.is_some() {
            self.transpose = other.transpose;
        }
        self
    }

    /// Read overrides through `lookup`, normally `std::env::var`
    pub fn from_env<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transpose = match lookup(env_vars::TRANSPOSE) {
            Some(value) => Some(parse_bool(env_vars::TRANSPOSE, &value)?),
            None => None,
        };

        Ok(Self {
            delimiter: lookup(env_vars::DELIMITER),
            enclosure: lookup(env_vars::ENCLOSURE),
            separator: lookup(env_vars::SEPARATOR),
            transpose,
        })
    }

    /// Apply defaults and produce validated conversion options
    ///
    /// A blank delimiter or separator falls back to its default. An empty
    /// enclosure disables quoting. `\t` and `tab` both name the tab character.
    pub fn resolve(&self) -> Result<ConvertOptions> {
        let delimiter = match self.delimiter.as_deref() {
            None => DEFAULT_DELIMITER,
            Some(value) => parse_delimiter(value)?,
        };

        let enclosure = match self.enclosure.as_deref() {
            None => Some(DEFAULT_ENCLOSURE),
            Some("") => None,
            Some(value) => Some(single_char("enclosure", value)?),
        };

        let table_separator = match self.separator.as_deref() {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => DEFAULT_TABLE_SEPARATOR.to_string(),
        };

        let options = ConvertOptions {
            delimiter,
            enclosure,
            table_separator,
            transpose: self.transpose.unwrap_or(false),
        };
        options.validate()?;

        Ok(options)
    }
}

fn parse_delimiter(value: &str) -> Result<char> {
    match value {
        "\t" | "\\t" | "tab" => Ok('\t'),
        blank if blank.trim().is_empty() => Ok(DEFAULT_DELIMITER),
        other => single_char("delimiter", other),
    }
}

fn single_char(option: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConvertError::invalid_option(
            option,
            format!("expected a single character, got '{}'", value),
        )),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConvertError::configuration(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion option defaults
    pub options: RawOptions,
}

impl Config {
    /// Location of the per-user config file
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConvertError::configuration("Could not determine user config directory")
        })?;

        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|source| ConvertError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration in layers: defaults, then file, then environment
    ///
    /// An explicit `config_file` must exist; the default location is only
    /// read when present.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        let env = RawOptions::from_env(|key| std::env::var(key).ok())?;
        config.options = config.options.merge(env);

        debug!("Layered configuration: {:?}", config);
        Ok(config)
    }
}
