use colored::*;
use log::info;
use crate::config::Config;
use crate::error::CleanError;
use crate::patterns::PatternLines;
use crate::resolver::{Probe, resolve};
use crate::runner::{Summary, process_pattern};

/// Resolves the pattern file and runs every pattern in it.
///
/// Only resolution failures come back as `Err`; everything after that is
/// reported and counted in the summary.
pub fn handle_clean(config: &Config, probe: &dyn Probe) -> Result<Summary, CleanError> {
    let request = resolve(&config.target, &config.pattern_file, probe)?;
    info!(
        "{} directory: {} file: {}",
        "🧹".red(),
        request.directory.bold(),
        request.filename.bold()
    );
    if config.dry_run {
        info!("{} Dry-run: nothing will be removed", "::".yellow());
    }

    let mut summary = Summary::default();
    let mut lines = PatternLines::open(&request.pattern_file()).unwrap_or_else(|e| {
        summary.record_failure(&e);
        PatternLines::empty()
    });

    for pattern in lines.by_ref() {
        process_pattern(&request.directory, &pattern, config.dry_run, &mut summary);
    }
    if lines.failed() {
        summary.failures += 1;
    }

    Ok(summary)
}
