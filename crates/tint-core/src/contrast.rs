//! Perceived brightness and legible overlay colors.
//!
//! [`is_color_light`] uses the ITU-R BT.601 luma weights on raw 0-255
//! channels (`0.299 R + 0.587 G + 0.114 B`), which is what decides whether
//! swatch labels are drawn in black or white. [`contrast_ratio`] is the
//! WCAG 2.x ratio on linearized sRGB for callers that need a number.

use crate::HexColor;

/// Brightness above which a color counts as light.
pub const LIGHT_THRESHOLD: u32 = 128;

/// Returns `true` when perceived brightness exceeds [`LIGHT_THRESHOLD`].
pub fn is_color_light(color: &HexColor) -> bool {
    let [r, g, b] = color.rgb();
    // Integer form of (299 R + 587 G + 114 B) / 1000 > 128.
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    weighted > LIGHT_THRESHOLD * 1000
}

/// Pure black on light colors, pure white on dark ones.
pub fn contrast_color(color: &HexColor) -> HexColor {
    if is_color_light(color) {
        HexColor::BLACK
    } else {
        HexColor::WHITE
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(color: &HexColor) -> f64 {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let [r, g, b] = color.rgb();
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: &HexColor, b: &HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}
