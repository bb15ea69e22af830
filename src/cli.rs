use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ignorerm",
    version,
    about = "Remove the files matched by the glob patterns of an ignore file"
)]
pub struct Cli {
    /// Directory holding the pattern file, or the pattern file itself
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Same as PATH
    #[arg(short = 't', long = "target", value_name = "PATH", conflicts_with = "path")]
    pub target: Option<String>,

    /// Report matched files without removing them
    #[arg(short = 'd', long = "dry-run", visible_alias = "dryRun")]
    pub dry_run: bool,

    /// Pattern file name used when PATH is a directory [default: .gitignore]
    #[arg(short = 'f', long = "file-name", value_name = "NAME")]
    pub file_name: Option<String>,

    /// Show per-pattern debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// The requested target, empty when none was given.
    pub fn target(&self) -> String {
        self.path
            .clone()
            .or_else(|| self.target.clone())
            .unwrap_or_default()
    }
}
