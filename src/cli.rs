use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::config::Config;
use crate::constants::{
    CONFIG_HELP, DIRECTORY_HELP, FORMAT_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, PATTERN_HELP,
    VERBOSE_HELP,
};
use crate::errors::{Result, invalid_config_error};
use crate::logging::LogLevel;
use crate::report::ReportFormat;
use crate::utils::expand_path;
use crate::workflow::ProcessingOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `directory`: Directory containing the batch files
/// - `pattern`: File name pattern of batch files
/// - `format`: Report format
/// - `config`: Path to the configuration file
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also write log records to a file
///
/// Every argument is optional; without any the built-in defaults apply.
pub fn build_command() -> Command {
    // define arg for the batch directory
    let arg_directory = Arg::new("directory")
        .short('d')
        .long("directory")
        .value_name("DIR")
        .help(DIRECTORY_HELP);

    // define arg for the file name pattern
    let arg_pattern = Arg::new("pattern")
        .short('p')
        .long("pattern")
        .value_name("GLOB")
        .help(PATTERN_HELP);

    // define arg for the report format
    let arg_format = Arg::new("format")
        .short('f')
        .long("format")
        .value_name("FORMAT")
        .help(FORMAT_HELP)
        .value_parser(ReportFormat::VARIANTS);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_directory)
        .arg(arg_pattern)
        .arg(arg_format)
        .arg(arg_config)
        .arg(arg_verbose)
        .arg(arg_log_file)
}

/// Parses the process arguments
///
/// Invalid usage makes `clap` print its message and exit with status 2.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// # Examples
/// ```
/// # use sql_batches::cli::{build_command, get_verbosity};
/// # use sql_batches::logging::LogLevel;
/// let matches = build_command().get_matches_from(["sqlbatches", "-vv"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Debug);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file, empty when none was requested
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .map(|file| expand_path(file))
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}

/// Collects the options of one run from the command-line arguments
///
/// # Errors
/// Returns an error if the report format cannot be parsed.
pub fn get_processing_options(matches: &ArgMatches) -> Result<ProcessingOptions> {
    let format = matches
        .get_one::<String>("format")
        .map(|format| format.parse::<ReportFormat>())
        .transpose()
        .map_err(|e| invalid_config_error(&e))?;

    let overrides = Config {
        directory: matches
            .get_one::<String>("directory")
            .map(|directory| PathBuf::from(expand_path(directory))),
        pattern: matches.get_one::<String>("pattern").cloned(),
        format,
    };

    Ok(ProcessingOptions {
        config_path: matches
            .get_one::<String>("config")
            .map(|config| PathBuf::from(expand_path(config))),
        overrides,
    })
}
