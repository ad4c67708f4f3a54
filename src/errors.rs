use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the SQL batch lister
#[derive(Debug)]
pub enum Error {
    /// The batch directory could not be listed
    DirectoryRead { source: io::Error, path: PathBuf },
    /// A batch file could not be read
    FileRead { source: io::Error, path: PathBuf },
    /// The file name pattern is not a valid glob
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// The configuration file could not be read or parsed
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        path: PathBuf,
    },
    /// The configuration parsed but holds unusable values
    InvalidConfig { detail: String },
    /// The report could not be written out
    Output { source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryRead { source, path } => {
                write!(f, "Failed to read directory {}: {source}", path.display())
            }
            Error::FileRead { source, path } => {
                write!(f, "Failed to read batch file {}: {source}", path.display())
            }
            Error::GlobPattern { pattern, source } => {
                write!(f, "Invalid glob pattern '{pattern}': {source}")
            }
            Error::ConfigParsing { source, path } => {
                write!(
                    f,
                    "Failed to parse configuration file {}: {source}",
                    path.display()
                )
            }
            Error::InvalidConfig { detail } => {
                write!(f, "Invalid configuration: {detail}")
            }
            Error::Output { source } => {
                write!(f, "Failed to write report: {source}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::DirectoryRead { source, .. } => Some(source),
            Error::FileRead { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            Error::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Output { source: err }
    }
}

/// Custom Result type for the SQL batch lister
///
/// # Examples
/// ```
/// use sql_batches::prelude::{Result, invalid_config_error};
///
/// fn example_function(pattern: &str) -> Result<&str> {
///     if pattern.is_empty() {
///         return Err(invalid_config_error("pattern must not be empty"));
///     }
///     Ok(pattern)
/// }
/// # assert!(example_function("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a directory read error
pub fn directory_read_error(err: io::Error, path: PathBuf) -> Error {
    Error::DirectoryRead { source: err, path }
}

/// Helper function to create a batch file read error
pub fn file_read_error(err: io::Error, path: PathBuf) -> Error {
    Error::FileRead { source: err, path }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, path: PathBuf) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        path,
    }
}

/// Helper function to create an invalid configuration error
pub fn invalid_config_error(detail: &str) -> Error {
    Error::InvalidConfig {
        detail: detail.to_string(),
    }
}
