//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading the data tables.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A table file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table file could not be parsed at all (row-level problems are
    /// dropped, not errors).
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
