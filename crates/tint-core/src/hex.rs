//! The canonical hex color value type.
//!
//! [`HexColor`] stores three bytes and always renders as lowercase
//! `#rrggbb`. Construction from text goes through [`is_valid_hex`] and
//! [`format_hex`], so shorthand (`#abc`) and a missing `#` are accepted
//! while anything else is rejected.
//!
//! Serde uses the canonical string form in both directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contrast;
use crate::convert::{self, decode_rgb, format_hex, is_valid_hex};
use crate::{ColorError, ColorResult, Hsl};

/// An sRGB color with canonical textual form `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Pure black, `#000000`.
    pub const BLACK: HexColor = HexColor::from_rgb(0, 0, 0);
    /// Pure white, `#ffffff`.
    pub const WHITE: HexColor = HexColor::from_rgb(255, 255, 255);

    /// Creates a color from byte channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Validates and normalizes a user-supplied hex string.
    ///
    /// Accepts 3- or 6-digit hex, with or without `#`, in any case.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] for anything [`is_valid_hex`] rejects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::HexColor;
    ///
    /// assert_eq!(HexColor::parse("#ABC")?.to_string(), "#aabbcc");
    /// assert!(HexColor::parse("#abcd").is_err());
    /// # Ok::<(), tint_core::ColorError>(())
    /// ```
    pub fn parse(s: &str) -> ColorResult<Self> {
        if !is_valid_hex(s) {
            return Err(ColorError::invalid_hex(s, "expected 3 or 6 hex digits"));
        }
        let canonical = format_hex(s);
        let [r, g, b] = decode_rgb(&canonical[1..])?;
        Ok(Self { r, g, b })
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to integer HSL.
    pub fn to_hsl(&self) -> Hsl {
        convert::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Returns `true` when perceived brightness exceeds 128.
    pub fn is_light(&self) -> bool {
        contrast::is_color_light(self)
    }

    /// Black or white, whichever stays legible on top of this color.
    pub fn contrast(&self) -> HexColor {
        contrast::contrast_color(self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(s: String) -> ColorResult<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(s: &str) -> ColorResult<Self> {
        Self::parse(s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.to_string()
    }
}

impl From<[u8; 3]> for HexColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<HexColor> for [u8; 3] {
    fn from(c: HexColor) -> Self {
        c.rgb()
    }
}
