//! Configuration loading functionality
//!
//! This module reads the optional YAML configuration file.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde_yaml::from_str;

use crate::errors::{Result, config_parsing_error};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid YAML for the
/// model, or fails validation.
pub fn load_config(file: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(file).map_err(|e| config_parsing_error(e, file.to_path_buf()))?;

    let config: Config =
        from_str(&content).map_err(|e| config_parsing_error(e, file.to_path_buf()))?;

    config.validate()?;
    debug!("Loaded configuration from {}: {config:?}", file.display());

    Ok(config)
}

/// Reads the configuration named on the command line, built-in defaults
/// otherwise
///
/// No file is looked up implicitly, so a run without `--config` only uses
/// the built-in defaults and flags.
///
/// # Errors
/// Returns an error if the named file cannot be loaded.
pub fn load_optional_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            info!("Using configuration file {}", path.display());
            load_config(path)
        }
        None => {
            debug!("No configuration file given, using defaults");
            Ok(Config::default())
        }
    }
}
