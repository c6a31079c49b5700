//! Session stream errors.

use std::path::PathBuf;

/// Errors that can occur while reading a session stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Failed to open session file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: failed to read: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid update: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Line {line}: stamp must be between 0 and {} seconds, got {at}",
        super::MAX_STAMP_SECS
    )]
    InvalidStamp { line: usize, at: f64 },

    #[error("Line {line}: stamp {at} is earlier than previous stamp {previous}")]
    OutOfOrder { line: usize, at: f64, previous: f64 },
}
