// File: crates/progress-core/src/error.rs
// Summary: Error taxonomy for log storage, chart rendering, and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("book name must not be empty")]
    EmptyBookName,

    #[error("cannot read log collection {path}: {source}")]
    CollectionUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} does not match the progress log schema: {reason}")]
    Schema { path: PathBuf, reason: String },

    #[error("log for '{book}' has no observations to chart")]
    EmptyLog { book: String },

    #[error(transparent)]
    Render(#[from] anyhow::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = ProgressError> = std::result::Result<T, E>;

impl ProgressError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }

    pub(crate) fn schema(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Schema { path: path.into(), reason: reason.into() }
    }
}
