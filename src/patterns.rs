use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use colored::*;
use log::warn;
use crate::error::CleanError;

/// Lazily yields the trimmed lines of a pattern file, in file order.
///
/// Blank lines are yielded as empty strings; deciding what they match is left
/// to the caller. An empty reader (pattern file unavailable) yields nothing.
/// The file handle only exists after a successful open and is released when
/// the reader is dropped.
pub struct PatternLines {
    lines: Option<Lines<BufReader<File>>>,
    path: String,
    failed: bool,
}

impl PatternLines {
    pub fn open(path: &str) -> Result<Self, CleanError> {
        let file = File::open(path).map_err(|source| CleanError::PatternFileUnavailable {
            path: path.to_string(),
            source,
        })?;
        Ok(Self {
            lines: Some(BufReader::new(file).lines()),
            path: path.to_string(),
            failed: false,
        })
    }

    pub fn empty() -> Self {
        Self { lines: None, path: String::new(), failed: false }
    }

    /// True once a read error cut the sequence short.
    pub fn failed(&self) -> bool {
        self.failed
    }
}

impl Iterator for PatternLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let lines = self.lines.as_mut()?;
        match lines.next()? {
            Ok(line) => Some(line.trim().to_string()),
            Err(e) => {
                warn!("{} Stopped reading {}: {}", "⚠️".yellow(), self.path, e);
                self.failed = true;
                // Release the handle; nothing more will be read from it.
                self.lines = None;
                None
            }
        }
    }
}
