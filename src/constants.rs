//! Application constants for csv2md
//!
//! Default option values, the synthetic transpose header, and the names
//! used to locate configuration.

// =============================================================================
// Conversion Defaults
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Default enclosure (quote) character
pub const DEFAULT_ENCLOSURE: char = '"';

/// Default Markdown column delimiter
pub const DEFAULT_TABLE_SEPARATOR: &str = "|";

/// Character repeated to build the header separator line
pub const SEPARATOR_FILL: char = '-';

/// Header row inserted when a two-row grid is transposed
pub const TRANSPOSE_HEADER: [&str; 2] = ["code", "value"];

/// Number of rows a grid must have for the transpose to apply
pub const TRANSPOSE_ROW_COUNT: usize = 2;

// =============================================================================
// Configuration Lookup
// =============================================================================

/// Directory under the platform config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "csv2md";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides, applied after the config file
pub mod env_vars {
    pub const DELIMITER: &str = "CSV2MD_DELIMITER";
    pub const ENCLOSURE: &str = "CSV2MD_ENCLOSURE";
    pub const SEPARATOR: &str = "CSV2MD_SEPARATOR";
    pub const TRANSPOSE: &str = "CSV2MD_TRANSPOSE";
}
