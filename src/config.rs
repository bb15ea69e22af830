use anyhow::{Context, Result, bail};
use colored::*;
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use crate::cli::Cli;
use crate::resolver::SEPARATOR;

pub const CONFIG_FILE: &str = ".ignorerm.toml";
pub const DEFAULT_PATTERN_FILE: &str = ".gitignore";

/// Contents of an optional `.ignorerm.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct Defaults {
    pub pattern_file: Option<String>,
    pub dry_run: Option<bool>,
}

/// Settings for one run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target: String,
    pub dry_run: bool,
    pub pattern_file: String,
}

impl Config {
    /// Layers the command line over the file config over built-in defaults.
    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self> {
        let pattern_file = cli
            .file_name
            .clone()
            .or(file.defaults.pattern_file)
            .unwrap_or_else(|| DEFAULT_PATTERN_FILE.to_string());

        if pattern_file.is_empty() {
            bail!("❌ Configuration Error: pattern file name must not be empty.");
        }
        if pattern_file.contains(SEPARATOR) {
            bail!(
                "❌ Configuration Error: pattern file name '{}' must not contain '{}'. Pass a path as the target instead.",
                pattern_file,
                SEPARATOR
            );
        }

        Ok(Self {
            target: cli.target(),
            dry_run: cli.dry_run || file.defaults.dry_run.unwrap_or(false),
            pattern_file,
        })
    }
}

/// Reads `.ignorerm.toml` from `dir`. A missing file yields the defaults.
pub fn load_file_config(dir: &Path) -> Result<FileConfig> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    debug!("{} Loaded settings from: {}", "🌿".green(), config_path.display().to_string().bold());
    Ok(config)
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    // Without a working directory there is nothing to load; resolution
    // reports that failure itself.
    let file = match env::current_dir() {
        Ok(dir) => load_file_config(&dir)?,
        Err(e) => {
            debug!("Skipping {}: {}", CONFIG_FILE, e);
            FileConfig::default()
        }
    };
    Config::merge(cli, file)
}
