//! Hex validation, normalization and hex <-> HSL conversion.
//!
//! These are the low-level routines every other tint crate builds on.
//! All of them are pure; none allocate beyond the returned value.
//!
//! # Functions
//!
//! - [`is_valid_hex`] - Accepts `rgb`, `#rgb`, `rrggbb`, `#rrggbb` (any case)
//! - [`format_hex`] - Normalizes to lowercase `#rrggbb`
//! - [`hex_to_hsl`] - Six-digit hex to integer [`Hsl`]
//! - [`hsl_to_hex`] - Fractional HSL back to [`HexColor`]
//!
//! # Example
//!
//! ```rust
//! use tint_core::convert::{format_hex, hex_to_hsl, hsl_to_hex, is_valid_hex};
//!
//! assert!(is_valid_hex("#F0a"));
//! assert_eq!(format_hex("#F0a"), "#ff00aa");
//!
//! let hsl = hex_to_hsl("#ff0000")?;
//! assert_eq!((hsl.h, hsl.s, hsl.l), (0, 100, 50));
//!
//! let cyan = hsl_to_hex(180.0, 100.0, 50.0);
//! assert_eq!(cyan.to_string(), "#00ffff");
//! # Ok::<(), tint_core::ColorError>(())
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::{ColorError, ColorResult, HexColor, Hsl};

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)#?(?:[0-9a-f]{3}){1,2}$").expect("hex pattern is valid"));

/// Rounds half toward positive infinity.
///
/// Matches the rounding used for every integer channel in tint, so
/// `x.5` always goes up regardless of sign.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Returns `true` for 3- or 6-digit hex colors, with or without a leading `#`.
///
/// Matching is case-insensitive. Nothing else is accepted: no whitespace,
/// no alpha digits, no `0x` prefix.
pub fn is_valid_hex(s: &str) -> bool {
    HEX_PATTERN.is_match(s)
}

/// Normalizes a hex string to lowercase `#rrggbb`.
///
/// Strips one leading `#`, expands 3-digit shorthand by doubling each
/// nibble, lowercases and re-adds `#`. The input is not validated; run
/// [`is_valid_hex`] first. Idempotent: `format_hex(&format_hex(x)) == format_hex(x)`.
pub fn format_hex(s: &str) -> String {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let mut out = String::with_capacity(7);
    out.push('#');
    if digits.chars().count() == 3 {
        for c in digits.chars() {
            out.push(c);
            out.push(c);
        }
    } else {
        out.push_str(digits);
    }
    out.make_ascii_lowercase();
    out
}

/// Parses a six-digit hex color (optional `#`) into [`Hsl`].
///
/// Shorthand is rejected here; callers holding user input should go
/// through [`HexColor::parse`], which validates and expands first.
///
/// # Errors
///
/// [`ColorError::InvalidHex`] unless the input is exactly six hex digits.
pub fn hex_to_hsl(hex: &str) -> ColorResult<Hsl> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(hex, "expected six hex digits"));
    }
    let [r, g, b] = decode_rgb(digits)?;
    Ok(rgb_to_hsl(r, g, b))
}

/// Converts fractional HSL to the nearest [`HexColor`].
///
/// Hue is taken modulo 360 (negative hues wrap), saturation and lightness
/// are clamped to `[0, 100]`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let [r, g, b] = hsl_to_rgb(h, s, l);
    HexColor::from_rgb(r, g, b)
}

/// Decodes six hex digits (no `#`) into bytes.
pub(crate) fn decode_rgb(digits: &str) -> ColorResult<[u8; 3]> {
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ColorError::invalid_hex(digits, "non-hex digit"))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Standard RGB -> HSL with integer degrees and percentages.
pub(crate) fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        // Red wins ties with green/blue, then green.
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    // Hue just below 360 rounds up to 360, which is 0.
    let hue = round_half_up(h * 360.0) as u16 % 360;
    Hsl {
        h: hue,
        s: round_half_up(s * 100.0) as u8,
        l: round_half_up(l * 100.0) as u8,
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    [to_byte(r), to_byte(g), to_byte(b)]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_byte(x: f64) -> u8 {
    round_half_up(x * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hex_forms() {
        for s in ["#fff", "fff", "#FFFFFF", "a1B2c3", "#4287f5"] {
            assert!(is_valid_hex(s), "{s} should be valid");
        }
        for s in ["", "#", "#ffff", "#fffff", "#ggg", "##fff", " #fff", "#fffffff", "0xfff"] {
            assert!(!is_valid_hex(s), "{s} should be invalid");
        }
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex("#ABC"), "#aabbcc");
        assert_eq!(format_hex("abc"), "#aabbcc");
        assert_eq!(format_hex("4287F5"), "#4287f5");
        assert_eq!(format_hex("#4287f5"), "#4287f5");
    }

    #[test]
    fn test_format_hex_idempotent() {
        for s in ["#ABC", "abc", "4287F5", "#00ff00", "F0F"] {
            let once = format_hex(s);
            assert_eq!(format_hex(&once), once);
        }
    }

    #[test]
    fn test_hex_to_hsl_primaries() {
        let red = hex_to_hsl("#ff0000").unwrap();
        assert_eq!((red.h, red.s, red.l), (0, 100, 50));

        let green = hex_to_hsl("00ff00").unwrap();
        assert_eq!((green.h, green.s, green.l), (120, 100, 50));

        let blue = hex_to_hsl("#0000ff").unwrap();
        assert_eq!((blue.h, blue.s, blue.l), (240, 100, 50));
    }

    #[test]
    fn test_hex_to_hsl_achromatic() {
        let gray = hex_to_hsl("#808080").unwrap();
        assert_eq!((gray.h, gray.s), (0, 0));
        assert_eq!(gray.l, 50);

        let white = hex_to_hsl("#ffffff").unwrap();
        assert_eq!((white.h, white.s, white.l), (0, 0, 100));
    }

    #[test]
    fn test_hex_to_hsl_rejects_malformed() {
        assert!(hex_to_hsl("#fff").is_err());
        assert!(hex_to_hsl("#12345g").is_err());
        assert!(hex_to_hsl("").is_err());
        assert!(hex_to_hsl("#1234567").is_err());
    }

    #[test]
    fn test_hue_wraps_below_360() {
        // Red with a hint of blue sits at hue ~359.7.
        let hsl = hex_to_hsl("#ff0001").unwrap();
        assert!(hsl.h < 360);
    }

    #[test]
    fn test_hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0).to_string(), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0).to_string(), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0).to_string(), "#0000ff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0).to_string(), "#000000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0).to_string(), "#ffffff");
    }

    #[test]
    fn test_hsl_to_hex_wraps_hue() {
        assert_eq!(hsl_to_hex(-120.0, 100.0, 50.0), hsl_to_hex(240.0, 100.0, 50.0));
        assert_eq!(hsl_to_hex(480.0, 100.0, 50.0), hsl_to_hex(120.0, 100.0, 50.0));
    }

    fn assert_roundtrip(hex: HexColor) {
        let hsl = hex_to_hsl(&hex.to_string()).unwrap();
        let back = hsl.to_hex();
        let [r0, g0, b0] = hex.rgb();
        let [r1, g1, b1] = back.rgb();
        assert!(
            r0.abs_diff(r1) <= 1 && g0.abs_diff(g1) <= 1 && b0.abs_diff(b1) <= 1,
            "{hex} -> {hsl:?} -> {back}"
        );
    }

    #[test]
    fn test_roundtrip_within_one() {
        for s in [
            "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff", "#ff00ff",
            "#000000", "#ffffff", "#808080", "#4287f5",
        ] {
            assert_roundtrip(s.parse().unwrap());
        }
    }

    #[test]
    fn test_roundtrip_grays() {
        for v in 0..=255u8 {
            assert_roundtrip(HexColor::from_rgb(v, v, v));
        }
    }
}
