//! Ordered color sequences.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::HexColor;

/// An ordered sequence of colors.
///
/// Palettes are created fresh by every generator call and never shared.
/// `Display` joins the colors with `", "`, the form used when copying a
/// whole palette as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<HexColor>);

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty palette with room for `n` colors.
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    /// Appends a color.
    pub fn push(&mut self, color: HexColor) {
        self.0.push(color);
    }

    /// Pads with copies of the last color or truncates to exactly `len`.
    ///
    /// An empty palette stays empty: there is no last color to repeat.
    pub fn fit_to(&mut self, len: usize) {
        if let Some(&last) = self.0.last() {
            self.0.resize(len, last);
        }
        self.0.truncate(len);
    }

    /// Borrows the colors as a slice.
    pub fn colors(&self) -> &[HexColor] {
        &self.0
    }

    /// Consumes the palette, returning the colors.
    pub fn into_vec(self) -> Vec<HexColor> {
        self.0
    }
}

impl Deref for Palette {
    type Target = [HexColor];

    fn deref(&self) -> &[HexColor] {
        &self.0
    }
}

impl From<Vec<HexColor>> for Palette {
    fn from(colors: Vec<HexColor>) -> Self {
        Self(colors)
    }
}

impl FromIterator<HexColor> for Palette {
    fn from_iter<I: IntoIterator<Item = HexColor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Palette {
    type Item = HexColor;
    type IntoIter = std::vec::IntoIter<HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a HexColor;
    type IntoIter = std::slice::Iter<'a, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
