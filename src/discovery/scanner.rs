//! Directory scanning functionality
//!
//! This module lists a directory and collects the batch files in it.

use std::fs::read_dir;
use std::path::{Path, PathBuf, absolute};

use log::{debug, info, warn};

use crate::errors::{Result, directory_read_error};
use crate::logging::scan_summary;

use super::matcher::BatchMatcher;

/// A directory entry whose name matched the batch pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFile {
    /// Absolute path of the entry
    pub path: PathBuf,
    /// The file name the entry was matched and sorted by
    pub filename: String,
}

/// The batch files of one directory in import order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchListing {
    directory: PathBuf,
    batches: Vec<BatchFile>,
}

impl BatchListing {
    /// The scanned directory, made absolute
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Batch files sorted by file name
    pub fn batches(&self) -> &[BatchFile] {
        &self.batches
    }

    pub fn total(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Batches paired with their 1-based position
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &BatchFile)> {
        self.batches.iter().enumerate().map(|(idx, batch)| (idx + 1, batch))
    }
}

/// Scans a directory for batch files
///
/// Every entry whose name matches is kept, whatever its type. Names that are
/// not valid unicode are skipped with a warning. The result is sorted in
/// ascending lexicographic order of file name.
///
/// # Errors
/// Returns an error if the directory cannot be made absolute or listed.
pub fn scan_batches(directory: &Path, matcher: &BatchMatcher) -> Result<BatchListing> {
    let directory =
        absolute(directory).map_err(|e| directory_read_error(e, directory.to_path_buf()))?;
    debug!("Scanning {} for {}", directory.display(), matcher.as_str());

    let entries = read_dir(&directory).map_err(|e| directory_read_error(e, directory.clone()))?;

    let mut batches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| directory_read_error(e, directory.clone()))?;
        let Some(filename) = entry.file_name().to_str().map(str::to_string) else {
            warn!(
                "Skipping entry with a non-unicode name: {}",
                entry.path().display()
            );
            continue;
        };

        if matcher.is_match(&filename) {
            batches.push(BatchFile {
                path: directory.join(&filename),
                filename,
            });
        }
    }

    batches.sort_by(|a, b| a.filename.cmp(&b.filename));

    info!(
        "{}",
        scan_summary(batches.len(), &directory.display().to_string())
    );

    Ok(BatchListing { directory, batches })
}
