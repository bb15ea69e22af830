use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    // --- RESOLUTION (fatal to the run) ---
    #[error("can not get working directory: {0}")]
    Environment(#[source] io::Error),

    #[error("can not discriminate '{path}' (directory or file): {source}")]
    Path {
        path: String,
        #[source]
        source: io::Error,
    },

    // --- PROCESSING (scoped to one item) ---
    #[error("can not open pattern file '{path}': {source}")]
    PatternFileUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("can not expand pattern '{pattern}': {message}")]
    GlobExpansion { pattern: String, message: String },

    #[error("can not remove '{path}': {source}")]
    Deletion {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl CleanError {
    /// Only argument resolution failures stop a run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CleanError::Environment(_) | CleanError::Path { .. })
    }
}
