//! File name matching
//!
//! This module decides which directory entries count as batch files.

use std::path::MAIN_SEPARATOR;

use glob::{MatchOptions, Pattern};
use log::trace;

use crate::errors::{Result, glob_pattern_error, invalid_config_error};

/// Shell glob semantics: case-sensitive, `*` never crosses a separator and
/// a leading dot has to be spelled out.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// A compiled batch file name pattern such as `batch_*.sql`
#[derive(Debug, Clone, PartialEq)]
pub struct BatchMatcher {
    pattern: Pattern,
}

impl BatchMatcher {
    /// Compiles a file name pattern
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid glob, is empty, or
    /// contains a path separator (only file names are matched).
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(invalid_config_error("pattern must not be empty"));
        }
        if pattern.contains('/') || pattern.contains(MAIN_SEPARATOR) {
            return Err(invalid_config_error(&format!(
                "pattern '{pattern}' must match file names only, not paths"
            )));
        }

        let pattern = Pattern::new(pattern).map_err(|e| glob_pattern_error(e, pattern))?;
        Ok(BatchMatcher { pattern })
    }

    /// The pattern as it was written
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Checks a single file name against the pattern
    pub fn is_match(&self, filename: &str) -> bool {
        let matched = self.pattern.matches_with(filename, MATCH_OPTIONS);
        trace!("{filename} matches {}: {matched}", self.pattern);
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PATTERN;

    #[test]
    fn test_default_pattern_matches_batches() {
        let matcher = BatchMatcher::new(DEFAULT_PATTERN).unwrap();

        assert!(matcher.is_match("batch_001.sql"));
        assert!(matcher.is_match("batch_Part_12.sql"));
        assert!(matcher.is_match("batch_.sql"));
    }

    #[test]
    fn test_default_pattern_rejects_other_names() {
        let matcher = BatchMatcher::new(DEFAULT_PATTERN).unwrap();

        assert!(!matcher.is_match("batch_001.sql.bak"));
        assert!(!matcher.is_match("batch_001.SQL"));
        assert!(!matcher.is_match("Batch_001.sql"));
        assert!(!matcher.is_match("postcodes.sql"));
        assert!(!matcher.is_match("batch001.sql"));
        assert!(!matcher.is_match(".batch_001.sql"));
    }

    #[test]
    fn test_leading_dot_requires_literal_dot() {
        let matcher = BatchMatcher::new("*.sql").unwrap();
        assert!(matcher.is_match("batch_1.sql"));
        assert!(!matcher.is_match(".hidden.sql"));

        let matcher = BatchMatcher::new(".*.sql").unwrap();
        assert!(matcher.is_match(".hidden.sql"));
    }

    #[test]
    fn test_character_classes() {
        let matcher = BatchMatcher::new("batch_[0-9][0-9].sql").unwrap();
        assert!(matcher.is_match("batch_07.sql"));
        assert!(!matcher.is_match("batch_7.sql"));
        assert!(!matcher.is_match("batch_ab.sql"));
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(BatchMatcher::new("batch_[.sql").is_err());
        assert!(BatchMatcher::new("").is_err());
        assert!(BatchMatcher::new("sub/batch_*.sql").is_err());
    }

    #[test]
    fn test_as_str() {
        let matcher = BatchMatcher::new(DEFAULT_PATTERN).unwrap();
        assert_eq!(matcher.as_str(), DEFAULT_PATTERN);
    }
}
