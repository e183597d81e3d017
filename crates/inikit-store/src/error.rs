//! Error types for the store module.

use std::path::PathBuf;

use inikit_core::IniError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file, or the directory it should be created in, does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Opening, reading or writing the file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents could not be parsed, or a mutation was rejected.
    #[error(transparent)]
    Document(#[from] IniError),
}

impl StoreError {
    /// Classify an I/O failure on `path`.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound { path },
            _ => StoreError::Io { path, source },
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
