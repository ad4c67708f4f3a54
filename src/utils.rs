use std::path::PathBuf;

use shellexpand::{full, tilde};

/// Expands `~` and environment variables in a path
///
/// Falls back to expanding only the tilde when a variable is not set, so a
/// literal `$NAME` survives instead of failing the whole path.
pub fn expand_path(path: &str) -> String {
    match full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => tilde(path).to_string(),
    }
}

/// Expands and joins path segments in order
pub fn process_strings_to_path<S: AsRef<str>>(segments: &[S]) -> PathBuf {
    segments
        .iter()
        .map(|segment| expand_path(segment.as_ref()))
        .collect()
}
