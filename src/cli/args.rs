//! Command-line argument definitions for csv2md
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::RawOptions;
use crate::error::{ConvertError, Result};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// CLI arguments for the CSV to Markdown converter
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv2md",
    version,
    about = "Convert CSV text into an aligned Markdown table",
    long_about = "Reads delimited text from a file or standard input and writes a Markdown \
                  pipe-table with padded columns. Rows are truncated to the shortest row so the \
                  table stays rectangular. Two-row input can be transposed into a vertical \
                  code/value table."
)]
pub struct Args {
    /// Input CSV file; standard input when omitted or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file for the Markdown table; standard output when omitted
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter (single character, `\t` or `tab` for tabs)
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Quote character; pass an empty string to disable quoting
    #[arg(short = 'e', long = "enclosure", value_name = "CHAR")]
    pub enclosure: Option<String>,

    /// Markdown column separator
    #[arg(short = 's', long = "separator", value_name = "STR")]
    pub separator: Option<String>,

    /// Transpose two-row input into a code/value table
    #[arg(short = 't', long = "transpose")]
    pub transpose: bool,

    /// Never transpose, overriding the config file and environment
    #[arg(long = "no-transpose", conflicts_with = "transpose")]
    pub no_transpose: bool,

    /// Config file (defaults to the per-user csv2md/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Print a conversion summary to stderr
    #[arg(long = "stats")]
    pub stats: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Input file path, `None` when reading standard input
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Option layer contributed by the command line
    ///
    /// Passing neither `--transpose` nor `--no-transpose` keeps whatever
    /// the config file or environment chose.
    pub fn raw_options(&self) -> RawOptions {
        let transpose = if self.transpose {
            Some(true)
        } else if self.no_transpose {
            Some(false)
        } else {
            None
        };

        RawOptions {
            delimiter: self.delimiter.clone(),
            enclosure: self.enclosure.clone(),
            separator: self.separator.clone(),
            transpose,
        }
    }

    /// Log level derived from `--quiet` and the `-v` count
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.input_path() {
            if !input.exists() {
                return Err(ConvertError::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }

            if !input.is_file() {
                return Err(ConvertError::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }

            if self.output.as_deref() == Some(input) {
                return Err(ConvertError::configuration(
                    "Output file must differ from the input file".to_string(),
                ));
            }
        }

        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(ConvertError::configuration(format!(
                    "Output path is a directory: {}",
                    output.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["csv2md"]);
        assert!(args.input_path().is_none());
        assert!(!args.transpose);
        assert_eq!(args.get_log_level(), "warn");
        assert_eq!(args.raw_options(), RawOptions::default());
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = Args::parse_from(["csv2md", "-"]);
        assert!(args.input_path().is_none());
    }

    #[test]
    fn test_option_flags() {
        let args = Args::parse_from([
            "csv2md", "data.csv", "-d", ";", "-e", "", "-s", "!", "--transpose",
        ]);
        let raw = args.raw_options();
        assert_eq!(args.input_path(), Some(Path::new("data.csv")));
        assert_eq!(raw.delimiter.as_deref(), Some(";"));
        assert_eq!(raw.enclosure.as_deref(), Some(""));
        assert_eq!(raw.separator.as_deref(), Some("!"));
        assert_eq!(raw.transpose, Some(true));
    }

    #[test]
    fn test_no_transpose_overrides_lower_layers() {
        let args = Args::parse_from(["csv2md", "--no-transpose"]);
        assert_eq!(args.raw_options().transpose, Some(false));

        let env = RawOptions {
            transpose: Some(true),
            ..RawOptions::default()
        };
        let options = env.merge(args.raw_options()).resolve().unwrap();
        assert!(!options.transpose);
    }

    #[test]
    fn test_transpose_flags_conflict() {
        assert!(Args::try_parse_from(["csv2md", "-t", "--no-transpose"]).is_err());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(Args::parse_from(["csv2md", "-v"]).get_log_level(), "info");
        assert_eq!(Args::parse_from(["csv2md", "-vv"]).get_log_level(), "debug");
        assert_eq!(Args::parse_from(["csv2md", "-vvv"]).get_log_level(), "trace");
        assert_eq!(Args::parse_from(["csv2md", "-q"]).get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["csv2md", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_validate_missing_input() {
        let args = Args::parse_from(["csv2md", "/nonexistent/input.csv"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_output_same_as_input() {
        let input = NamedTempFile::new().unwrap();
        let path = input.path().to_str().unwrap();
        let args = Args::parse_from(["csv2md", path, "-o", path]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_existing_input() {
        let input = NamedTempFile::new().unwrap();
        let args = Args::parse_from(["csv2md", input.path().to_str().unwrap()]);
        assert!(args.validate().is_ok());
    }
}
