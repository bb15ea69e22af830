use glob::{MatchOptions, Paths, Pattern};
use crate::error::CleanError;
use crate::resolver::SEPARATOR;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Expands `pattern` under `directory` (which ends with a separator).
///
/// Only the pattern is interpreted; the directory is matched literally.
/// Matches come back sorted per directory level.
pub fn expand_pattern(directory: &str, pattern: &str) -> Result<Paths, CleanError> {
    let full_pattern = format!("{}{}", Pattern::escape(directory), normalize_pattern(pattern));
    glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|e| CleanError::GlobExpansion {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Drops leading separators (the directory already ends with one) and
/// collapses `**` so a wildcard never descends into subdirectories.
fn normalize_pattern(pattern: &str) -> String {
    let mut normalized = String::with_capacity(pattern.len());
    let mut previous_star = false;
    for c in pattern.trim_start_matches(SEPARATOR).chars() {
        if c == '*' && previous_star {
            continue;
        }
        previous_star = c == '*';
        normalized.push(c);
    }
    normalized
}
