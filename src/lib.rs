//! Lists SQL batch files in the order a downstream import should apply them.
//!
//! The default run scans `postcode_batches` for `batch_*.sql` entries and
//! prints one `BATCH|<index>|<total>|<absolute path>` record per file.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod report;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_processing_options, get_verbosity};
    pub use crate::config::Config;
    pub use crate::discovery::{BatchFile, BatchListing, BatchMatcher, scan_batches};
    pub use crate::errors::{
        config_parsing_error, directory_read_error, file_read_error, glob_pattern_error,
        invalid_config_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::report::{ReportFormat, write_report};
    pub use crate::workflow::{
        EnumerateOptions, ProcessingOptions, enumerate_batches, process_batches, run,
    };
}
