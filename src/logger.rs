use chrono::Local;
use env_logger::{Builder, Env};
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Line-oriented sink on stderr: `<timestamp> <LEVEL> <message>`.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbose: bool) {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.args()
            )
        })
        .init();
}
