//! Workflow engine
//!
//! This module contains the engine that orchestrates the listing steps.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::config::{Config, load_optional_config};
use crate::constants::{DEFAULT_BATCH_DIR, DEFAULT_PATTERN};
use crate::discovery::{BatchListing, BatchMatcher, scan_batches};
use crate::report::{ReportFormat, write_report};

/// Options for one run, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Configuration file named with `--config`
    pub config_path: Option<PathBuf>,
    /// Values given as flags; they override the configuration file
    pub overrides: Config,
}

/// Fully resolved settings of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerateOptions {
    pub directory: PathBuf,
    pub pattern: String,
    pub format: ReportFormat,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        EnumerateOptions {
            directory: PathBuf::from(DEFAULT_BATCH_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            format: ReportFormat::default(),
        }
    }
}

impl From<Config> for EnumerateOptions {
    fn from(config: Config) -> Self {
        let defaults = EnumerateOptions::default();
        EnumerateOptions {
            directory: config.directory.unwrap_or(defaults.directory),
            pattern: config.pattern.unwrap_or(defaults.pattern),
            format: config.format.unwrap_or(defaults.format),
        }
    }
}

/// Lists the batch files selected by `options`
///
/// # Errors
/// Returns an error if the pattern is invalid or the directory cannot be
/// read.
pub fn enumerate_batches(options: &EnumerateOptions) -> Result<BatchListing> {
    let matcher = BatchMatcher::new(&options.pattern)?;
    Ok(scan_batches(&options.directory, &matcher)?)
}

/// Lists the batch files and writes the report to `out`
///
/// # Errors
/// Returns an error if listing fails or the report cannot be written.
pub fn run<W: Write>(options: &EnumerateOptions, out: &mut W) -> Result<BatchListing> {
    let listing = enumerate_batches(options)?;
    if options.format.embeds_content() {
        debug!("Reading {} batch files for the {} report", listing.total(), options.format);
    }
    write_report(out, &listing, options.format)?;
    Ok(listing)
}

/// Processes a listing request
///
/// This function orchestrates the workflow steps:
/// 1. Read the configuration file, if any
/// 2. Layer the command-line values over it and fill the rest with defaults
/// 3. Scan the directory and write the report
///
/// # Errors
/// Returns an error if any step fails.
pub fn process_batches<W: Write>(options: ProcessingOptions, out: &mut W) -> Result<BatchListing> {
    // Step 1: Read the configuration
    let file_config = load_optional_config(options.config_path.as_deref())?;

    // Step 2: Resolve the settings
    options.overrides.validate()?;
    let settings = EnumerateOptions::from(options.overrides.or(file_config));
    debug!("Resolved settings: {settings:?}");

    // Step 3: List and report
    let listing = run(&settings, out)?;
    info!("Reported {} batch files", listing.total());

    Ok(listing)
}
