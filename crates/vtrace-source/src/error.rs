//! Error types for loading source files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors a [`SourceLoader`](crate::SourceLoader) can report.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File does not exist.
    #[error("source file not found: {path}")]
    NotFound { path: PathBuf },

    /// File exists but could not be read as text.
    #[error("failed to read source file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for source loading.
pub type Result<T> = std::result::Result<T, SourceError>;

impl SourceError {
    /// Classify an I/O error for `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}
