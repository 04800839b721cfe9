//! Error types for style processing.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building style descriptors.
///
/// Extraction itself never fails: text without recognizable declarations
/// simply yields an empty [`PropertyMap`](crate::properties::PropertyMap).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base style text could not be read.
    #[error("Failed to read base style '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
