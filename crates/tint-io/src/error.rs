//! Error types for file-facing operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tint_extract::ExtractError;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Image format not recognized or not compiled in.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Library document is not valid JSON for this schema.
    #[error("invalid library file {path}: {source}")]
    InvalidLibrary {
        /// Library path.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded pixels did not form a valid buffer.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// No saved palette has this id.
    #[error("palette not found: {0}")]
    PaletteNotFound(u64),
}

impl IoError {
    /// Returns `true` for [`IoError::PaletteNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PaletteNotFound(_))
    }
}

impl From<image::ImageError> for IoError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::Io(e),
            image::ImageError::Unsupported(e) => Self::UnsupportedFormat(e.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
