//! Error types for palette generation.

use thiserror::Error;
use tint_core::ColorError;

/// Palette generation error.
///
/// An unknown harmony identifier is *not* an error for
/// [`crate::generate_palette`]; it only surfaces from strict parsing
/// through `HarmonyType::from_str`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarmonyError {
    /// Base color failed validation.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Requested color count is zero.
    #[error("invalid color count: {0} (must be at least 1)")]
    InvalidCount(usize),

    /// Identifier does not name a harmony type.
    #[error("unknown harmony type: {0}")]
    UnknownHarmony(String),
}

/// Result type for palette generation.
pub type HarmonyResult<T> = Result<T, HarmonyError>;
