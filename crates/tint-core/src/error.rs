//! Error types for tint-core operations.
//!
//! Color conversion treats malformed input as a caller contract violation.
//! Instead of producing garbage (`NaN` channels, truncated strings), every
//! entry point that accepts text validates it and fails fast with a
//! [`ColorError`].
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{ColorError, HexColor};
//!
//! let err = "#12345".parse::<HexColor>().unwrap_err();
//! assert!(matches!(err, ColorError::InvalidHex { .. }));
//! assert!(err.to_string().contains("#12345"));
//! ```
//!
//! # Used By
//!
//! - [`crate::convert::hex_to_hsl`] - six-digit hex parsing
//! - [`crate::hex::HexColor`] - validated construction
//! - `tint-harmony` / `tint-io` - wrapped into their own error enums

use thiserror::Error;

/// Result type alias using [`ColorError`] as the error type.
pub type ColorResult<T> = std::result::Result<T, ColorError>;

/// Errors that can occur while parsing or converting colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Input is not a 3- or 6-digit hex color (with or without `#`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::ColorError;
    ///
    /// let err = ColorError::invalid_hex("#zzz", "non-hex digit");
    /// assert_eq!(err.to_string(), "invalid hex color '#zzz': non-hex digit");
    /// ```
    #[error("invalid hex color '{input}': {reason}")]
    InvalidHex {
        /// The rejected input, verbatim
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A numeric channel is outside its allowed range.
    #[error("{channel} value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Channel name (hue, saturation, lightness, ...)
        channel: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

impl ColorError {
    /// Creates a [`ColorError::InvalidHex`] error.
    #[inline]
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`ColorError::OutOfRange`] error.
    #[inline]
    pub fn out_of_range(channel: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            channel,
            value,
            min,
            max,
        }
    }

    /// Returns `true` if this is a hex parsing error.
    #[inline]
    pub fn is_invalid_hex(&self) -> bool {
        matches!(self, Self::InvalidHex { .. })
    }
}
