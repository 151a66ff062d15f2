//! # tint-core
//!
//! Core color types and conversions for the tint palette toolkit.
//!
//! This crate provides the foundational types used throughout tint:
//!
//! - [`HexColor`] - Canonical `#rrggbb` color value
//! - [`Hsl`] - Integer hue/saturation/lightness triple
//! - [`Palette`] - Ordered sequence of colors produced by a generator
//! - [`convert`] - Hex validation, normalization and hex <-> HSL math
//! - [`contrast`] - Perceived brightness and legible text colors
//!
//! ## Design Philosophy
//!
//! Everything here is a pure function over immutable values. A [`HexColor`]
//! can only be built through validation, so downstream crates never carry
//! malformed color strings around:
//!
//! ```
//! use tint_core::HexColor;
//!
//! let base: HexColor = "4287F5".parse()?;
//! assert_eq!(base.to_string(), "#4287f5");
//!
//! let hsl = base.to_hsl();
//! assert_eq!((hsl.h, hsl.s, hsl.l), (217, 90, 61));
//! # Ok::<(), tint_core::ColorError>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-harmony (harmony rules)
//!    +-- tint-extract (image color extraction)
//!    +-- tint-io (decode, library, export)
//!    +-- tint-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod contrast;
pub mod convert;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod palette;

// Re-exports for convenience
pub use contrast::{contrast_color, contrast_ratio, is_color_light, relative_luminance};
pub use convert::{format_hex, hex_to_hsl, hsl_to_hex, is_valid_hex};
pub use error::{ColorError, ColorResult};
pub use hex::HexColor;
pub use hsl::Hsl;
pub use palette::Palette;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contrast::{contrast_color, is_color_light};
    pub use crate::convert::{format_hex, hex_to_hsl, hsl_to_hex, is_valid_hex};
    pub use crate::error::{ColorError, ColorResult};
    pub use crate::hex::HexColor;
    pub use crate::hsl::Hsl;
    pub use crate::palette::Palette;
}
