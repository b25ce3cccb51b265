//! Error types for fa-io.

use std::path::PathBuf;

use thiserror::Error;

use fa_core::FaError;

/// Errors raised while loading a data file or writing a report.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] FaError),
}

/// Alias for `Result<T, LoadError>`.
pub type LoadResult<T> = Result<T, LoadError>;
