//! Report rendering
//!
//! Turns a [`BatchListing`] into the text handed to the import step.

use std::fmt;
use std::fs::read_to_string;
use std::io::Write;
use std::str::FromStr;

use serde::Deserialize;

use crate::discovery::{BatchFile, BatchListing};
use crate::errors::{Result, file_read_error};

/// Layout of the report written to stdout
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `BATCH|<index>|<total>|<path>` records between a header and a summary
    #[default]
    Index,
    /// `BATCH_<index>|<content>` lines carrying each file's SQL
    Inline,
    /// A banner per batch followed by its SQL
    Banner,
}

impl ReportFormat {
    pub const VARIANTS: [&'static str; 3] = ["index", "inline", "banner"];

    /// Whether rendering needs to read the batch files
    pub fn embeds_content(&self) -> bool {
        !matches!(self, ReportFormat::Index)
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "index" => Ok(ReportFormat::Index),
            "inline" => Ok(ReportFormat::Inline),
            "banner" => Ok(ReportFormat::Banner),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Index => "index",
            ReportFormat::Inline => "inline",
            ReportFormat::Banner => "banner",
        };
        f.write_str(name)
    }
}

/// Writes the report for `listing` in the given format
///
/// # Errors
/// Returns an error if writing fails or, for formats embedding content, if a
/// batch file cannot be read as UTF-8 text.
pub fn write_report<W: Write>(
    out: &mut W,
    listing: &BatchListing,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Index => write_index(out, listing),
        ReportFormat::Inline => write_inline(out, listing),
        ReportFormat::Banner => write_banner(out, listing),
    }
}

fn write_index<W: Write>(out: &mut W, listing: &BatchListing) -> Result<()> {
    let total = listing.total();
    writeln!(out, "Total batches to process: {total}")?;
    writeln!(out)?;

    for (idx, batch) in listing.indexed() {
        writeln!(out, "BATCH|{idx}|{total}|{}", batch.path.display())?;
    }

    writeln!(out)?;
    writeln!(out, "Total: {total} batch files ready for import")?;
    Ok(())
}

fn write_inline<W: Write>(out: &mut W, listing: &BatchListing) -> Result<()> {
    writeln!(out, "Total batches to process: {}", listing.total())?;

    for (idx, batch) in listing.indexed() {
        let content = read_batch(batch)?;
        writeln!(out, "BATCH_{idx}|{content}")?;
    }
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, listing: &BatchListing) -> Result<()> {
    let total = listing.total();
    writeln!(out, "Found {total} batch files to process")?;
    writeln!(out)?;

    for (idx, batch) in listing.indexed() {
        let content = read_batch(batch)?;
        writeln!(out, "===== BATCH {idx}/{total} ({}) =====", batch.filename)?;
        writeln!(out, "{content}")?;
        writeln!(out)?;
    }
    Ok(())
}

fn read_batch(batch: &BatchFile) -> Result<String> {
    read_to_string(&batch.path).map_err(|e| file_read_error(e, batch.path.clone()))
}
