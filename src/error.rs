// src/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}: malformed row: {reason}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DatasetError>;

impl DatasetError {
    /// Attaches a concrete path to a bare I/O error.
    #[must_use]
    pub fn io(source: std::io::Error, path: &Path) -> Self {
        DatasetError::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}
