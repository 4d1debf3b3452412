//! Command implementation for the csv2md CLI
//!
//! Sets up logging, resolves options from config file, environment and
//! flags, then reads the input, converts it and writes the table.

use crate::cli::args::Args;
use crate::config::{Config, ConvertOptions};
use crate::models::{ConversionReport, TransposeOutcome};
use crate::table::convert_with_report;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main command runner
///
/// 1. Set up logging
/// 2. Validate arguments and resolve conversion options
/// 3. Convert the input and write the table
/// 4. Report what was dropped or skipped
pub fn run(args: Args) -> Result<ConversionReport> {
    setup_logging(&args);

    info!("Starting csv2md");
    debug!("Command line arguments: {:?}", args);

    execute(&args)
}

/// Run a conversion without touching the global logger
pub fn execute(args: &Args) -> Result<ConversionReport> {
    args.validate()?;

    let options = load_options(args)?;
    debug!("Resolved options: {:?}", options);

    let text = read_input(args.input_path())?;
    debug!("Read {} bytes of input", text.len());

    let conversion = convert_with_report(&text, &options)?;
    write_output(args.output.as_deref(), &conversion.markdown)?;

    log_report(&conversion.report);
    if args.stats {
        print_stats(&conversion.report);
    }

    Ok(conversion.report)
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level chosen with `-v`/`--quiet`.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv2md={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(io::stderr),
            )
            .try_init()
    };

    match result {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        Err(e) => debug!("Logging already initialized: {}", e),
    }
}

/// Resolve options: defaults, config file, environment, then flags
pub fn load_options(args: &Args) -> Result<ConvertOptions> {
    let config = Config::load_layered(args.config_file.as_deref())?;

    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No explicit config file, using defaults and environment"),
    }

    let options = config.options.merge(args.raw_options()).resolve()?;
    Ok(options)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))
        }
        None => {
            info!("Reading standard input");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, markdown: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, markdown)
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            info!("Wrote table to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(markdown.as_bytes())
                .context("Failed to write to standard output")?;
            stdout.flush().context("Failed to flush standard output")?;
        }
    }
    Ok(())
}

fn log_report(report: &ConversionReport) {
    info!(
        "Rendered {} rows x {} columns",
        report.rows_rendered, report.columns
    );

    if report.has_dropped_cells() {
        warn!(
            "Dropped {} cells beyond the shortest row ({} columns kept)",
            report.dropped_cells, report.columns
        );
    }

    if let TransposeOutcome::Skipped { rows } = report.transpose {
        warn!(
            "Transpose needs exactly 2 rows but the input has {}; table left as is",
            rows
        );
    }

    if report.trailing_blank_rows > 0 {
        debug!("Ignored {} trailing blank rows", report.trailing_blank_rows);
    }
}

fn print_stats(report: &ConversionReport) {
    let transpose = match report.transpose {
        TransposeOutcome::NotRequested => "not requested".to_string(),
        TransposeOutcome::Applied => "applied".to_string(),
        TransposeOutcome::Skipped { rows } => format!("skipped ({} rows)", rows),
    };

    eprintln!("{}", "Conversion summary".bright_green().bold());
    eprintln!(
        "  {} {}",
        "Rows:".bright_white(),
        report.rows_rendered.to_string().bright_cyan()
    );
    eprintln!(
        "  {} {}",
        "Columns:".bright_white(),
        report.columns.to_string().bright_cyan()
    );
    eprintln!(
        "  {} {:?}",
        "Widths:".bright_white(),
        report.widths
    );
    eprintln!("  {} {}", "Transpose:".bright_white(), transpose.bright_cyan());

    if report.has_dropped_cells() {
        eprintln!(
            "  {} {}",
            "Dropped cells:".bright_white(),
            report.dropped_cells.to_string().bright_yellow()
        );
    }
}
