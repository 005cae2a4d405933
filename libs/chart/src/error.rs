//! Error types for chart export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or writing a seating chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// No assignment exists yet; arrange seats first.
    #[error("nothing to export; arrange seats first")]
    NothingArranged,

    /// A page file could not be written.
    #[error("cannot write chart page {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
