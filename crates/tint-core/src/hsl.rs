//! Integer HSL triple.

use serde::{Deserialize, Serialize};

use crate::{ColorError, ColorResult, HexColor};

/// Hue in whole degrees, saturation and lightness in whole percent.
///
/// Produced by [`HexColor::to_hsl`]; the harmony rules do their arithmetic
/// on these values in `f64` and map back with [`crate::hsl_to_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue, `0..360`.
    pub h: u16,
    /// Saturation, `0..=100`.
    pub s: u8,
    /// Lightness, `0..=100`.
    pub l: u8,
}

impl Hsl {
    /// Creates a checked HSL triple.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] when hue is 360 or more, or saturation or
    /// lightness exceed 100.
    pub fn new(h: u16, s: u8, l: u8) -> ColorResult<Self> {
        if h >= 360 {
            return Err(ColorError::out_of_range("hue", f64::from(h), 0.0, 359.0));
        }
        if s > 100 {
            return Err(ColorError::out_of_range("saturation", f64::from(s), 0.0, 100.0));
        }
        if l > 100 {
            return Err(ColorError::out_of_range("lightness", f64::from(l), 0.0, 100.0));
        }
        Ok(Self { h, s, l })
    }

    /// Converts back to the nearest hex color.
    pub fn to_hex(&self) -> HexColor {
        crate::hsl_to_hex(f64::from(self.h), f64::from(self.s), f64::from(self.l))
    }
}

impl From<HexColor> for Hsl {
    fn from(c: HexColor) -> Self {
        c.to_hsl()
    }
}
