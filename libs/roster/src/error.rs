//! Error types for roster import.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while importing a roster file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read at all.
    #[error("cannot read roster file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The bytes decode as neither UTF-8 nor Big5.
    #[error("roster file {path} is neither UTF-8 nor Big5")]
    Undecodable { path: PathBuf },

    /// The delimited content could not be parsed.
    #[error("malformed roster file: {0}")]
    Malformed(#[from] csv::Error),

    /// The file has no header row.
    #[error("roster file has no header row")]
    NoHeader,

    /// The requested column does not exist.
    #[error("no column named {name:?}; available columns: {available:?}")]
    UnknownColumn {
        name: String,
        available: Vec<String>,
    },
}
