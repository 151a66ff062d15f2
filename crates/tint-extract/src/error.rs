//! Error types for color extraction.

use thiserror::Error;

/// Error type for pixel buffer handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Byte length does not match `width * height * 4`.
    #[error("buffer size mismatch: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    BufferSize {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Required byte count.
        expected: usize,
        /// Supplied byte count.
        actual: usize,
    },
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
