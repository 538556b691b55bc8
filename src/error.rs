//! Errors raised while reading input for the extraction commands.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid timestamp '{0}', expected RFC 3339")]
    InvalidTimestamp(String),

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}
