//! Constants used throughout the application
//!
//! This module centralises defaults and help texts so they can be changed
//! in one place.

/// Directory scanned when neither the command line nor a configuration file
/// names one, resolved against the working directory
pub const DEFAULT_BATCH_DIR: &str = "postcode_batches";

/// File name pattern a directory entry has to match to count as a batch
pub const DEFAULT_PATTERN: &str = "batch_*.sql";

/// No log file unless one is requested
pub const LOG_FILE_DEFAULT: &str = "";

/// Help text for the directory command-line option
pub const DIRECTORY_HELP: &str = "Directory containing the batch files";

/// Help text for the pattern command-line option
pub const PATTERN_HELP: &str = "File name pattern of batch files [default: batch_*.sql]";

/// Help text for the format command-line option
pub const FORMAT_HELP: &str = "Report format [default: index]";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";
