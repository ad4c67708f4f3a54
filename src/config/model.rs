//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

use crate::discovery::BatchMatcher;
use crate::errors::{Result, invalid_config_error};
use crate::report::ReportFormat;
use crate::utils::{expand_path, process_strings_to_path};

/// Settings for one listing run
///
/// Every field is optional. The same structure carries the values read from
/// a configuration file and the ones given on the command line, so the two
/// can be layered with [`Config::or`].
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the batch files
    #[serde(default, deserialize_with = "deserialize_optional_directory")]
    pub directory: Option<PathBuf>,
    /// Glob a file name has to match
    #[serde(default)]
    pub pattern: Option<String>,
    /// Report layout
    #[serde(default)]
    pub format: Option<ReportFormat>,
}

impl Config {
    /// Fills the fields missing here from `fallback`
    pub fn or(self, fallback: Config) -> Config {
        Config {
            directory: self.directory.or(fallback.directory),
            pattern: self.pattern.or(fallback.pattern),
            format: self.format.or(fallback.format),
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error if the directory is empty or the pattern is not a
    /// usable file name glob.
    pub fn validate(&self) -> Result<()> {
        if let Some(directory) = &self.directory
            && directory.as_os_str().is_empty()
        {
            return Err(invalid_config_error("directory must not be empty"));
        }

        if let Some(pattern) = &self.pattern {
            BatchMatcher::new(pattern)?;
        }

        Ok(())
    }
}

/// A directory written either as one string or as a list of segments
#[derive(Deserialize)]
#[serde(untagged)]
enum DirectoryValue {
    Path(String),
    Segments(Vec<String>),
}

impl DirectoryValue {
    fn into_path(self) -> PathBuf {
        match self {
            DirectoryValue::Path(path) => PathBuf::from(expand_path(&path)),
            DirectoryValue::Segments(segments) => process_strings_to_path(&segments),
        }
    }
}

fn deserialize_optional_directory<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<DirectoryValue> = Option::deserialize(deserializer)?;
    Ok(value.map(DirectoryValue::into_path))
}
