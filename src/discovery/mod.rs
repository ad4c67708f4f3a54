//! Batch discovery module
//!
//! This module contains components for scanning a directory and matching
//! batch file names.

mod matcher;
mod scanner;

pub use matcher::BatchMatcher;
pub use scanner::{BatchFile, BatchListing, scan_batches};
