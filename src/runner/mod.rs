pub mod common;
pub mod handler;

use colored::*;
use log::{debug, info, warn};
use crate::error::CleanError;
use self::common::expand_pattern;
use self::handler::rm::remove_path;

/// Counts for one run, reported once at the end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub patterns: usize,
    pub removed: usize,
    pub candidates: usize,
    pub failures: usize,
}

impl Summary {
    pub fn record_failure(&mut self, err: &CleanError) {
        debug_assert!(!err.is_fatal());
        warn!("{} {}", "⚠️".yellow(), err);
        self.failures += 1;
    }
}

/// Expands one pattern under `directory` and removes (or, in dry-run mode,
/// only reports) every match. Failures are reported and never stop the
/// remaining matches.
pub fn process_pattern(directory: &str, pattern: &str, dry_run: bool, summary: &mut Summary) {
    summary.patterns += 1;

    if pattern.is_empty() {
        debug!("Skipping blank pattern line");
        return;
    }

    debug!("{} Expanding {}{}", "::".blue(), directory, pattern);
    let paths = match expand_pattern(directory, pattern) {
        Ok(paths) => paths,
        Err(e) => {
            summary.record_failure(&e);
            return;
        }
    };

    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                summary.record_failure(&CleanError::GlobExpansion {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        if dry_run {
            info!("{} [DRY-RUN] would remove: {}", "::".yellow(), path.display());
            summary.candidates += 1;
            continue;
        }

        match remove_path(&path) {
            Ok(()) => {
                info!("{} removed: {}", "🗑️".green(), path.display());
                summary.removed += 1;
            }
            Err(source) => summary.record_failure(&CleanError::Deletion {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
