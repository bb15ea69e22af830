mod cli;
mod config;
mod error;
mod handlers;
mod logger;
mod patterns;
mod resolver;
mod runner;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::*;
use config::load_config;
use handlers::clean::handle_clean;
use log::{error, info};
use resolver::OsProbe;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = load_config(&cli)?;

    match handle_clean(&config, &OsProbe) {
        Ok(summary) => {
            let verb = if config.dry_run { "would remove" } else { "removed" };
            let count = if config.dry_run { summary.candidates } else { summary.removed };
            info!(
                "{} {} pattern(s), {} {} file(s), {} failure(s)",
                "✨".green(),
                summary.patterns,
                verb,
                count,
                summary.failures
            );
        }
        Err(e) => {
            error!("{} {}", "❌".red(), e);
            error!("can not continue to process");
        }
    }

    Ok(())
}
