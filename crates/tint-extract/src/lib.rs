//! # tint-extract
//!
//! Histogram-based color extraction from raw RGBA pixels.
//!
//! Both operations sample the buffer on a fixed pixel stride, skip
//! transparent pixels, snap channels to a coarse grid and count how often
//! each grid color occurs.
//!
//! - [`extract_dominant_color`] - the single most frequent color
//! - [`extract_palette`] - frequent colors that are visibly distinct
//!
//! # Example
//!
//! ```rust
//! use tint_extract::{PixelBuffer, extract_dominant_color};
//!
//! let rgba = [66, 135, 245, 255].repeat(16);
//! let pixels = PixelBuffer::new(4, 4, &rgba)?;
//! assert_eq!(extract_dominant_color(&pixels).to_string(), "#4088f8");
//! # Ok::<(), tint_extract::ExtractError>(())
//! ```
//!
//! Decoding image files into a [`PixelBuffer`] lives in `tint-io`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod buffer;
pub mod diversity;
mod error;
pub mod histogram;

pub use buffer::{ALPHA_CUTOFF, PixelBuffer};
pub use diversity::MAX_FILTER_PASSES;
pub use error::{ExtractError, ExtractResult};
pub use histogram::ColorBucket;

use tint_core::HexColor;
use tracing::trace;

use histogram::{Histogram, to_hex};

/// Pixel stride for dominant color sampling.
pub const DOMINANT_STRIDE: usize = 4;

/// Pixel stride for palette sampling.
pub const PALETTE_STRIDE: usize = 5;

/// Most frequent quantized color, or `None` when nothing opaque was sampled.
pub fn dominant_color(pixels: &PixelBuffer<'_>) -> Option<HexColor> {
    let hist = Histogram::from_samples(pixels.opaque_samples(DOMINANT_STRIDE));
    trace!(
        width = pixels.width(),
        height = pixels.height(),
        buckets = hist.len(),
        "dominant color histogram"
    );
    hist.most_frequent().map(|b| to_hex(b.color))
}

/// Most frequent quantized color; black when nothing opaque was sampled.
pub fn extract_dominant_color(pixels: &PixelBuffer<'_>) -> HexColor {
    dominant_color(pixels).unwrap_or(HexColor::BLACK)
}

/// Up to `count` frequent, mutually distinct colors, most frequent first.
///
/// The top `2 * count` buckets go through the diversity filter (see
/// [`diversity`]). Fewer than `count` colors come back when the image does
/// not have enough distinct ones; an image with no opaque samples yields
/// an empty vector.
pub fn extract_palette(pixels: &PixelBuffer<'_>, count: usize) -> Vec<HexColor> {
    let hist = Histogram::from_samples(pixels.opaque_samples(PALETTE_STRIDE));
    trace!(
        width = pixels.width(),
        height = pixels.height(),
        buckets = hist.len(),
        count,
        "palette histogram"
    );

    let candidates: Vec<_> = hist
        .into_ranked()
        .into_iter()
        .take(count.saturating_mul(2))
        .map(|b| b.color)
        .collect();

    diversity::filter_similar(&candidates, count)
        .into_iter()
        .map(to_hex)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    /// `n` opaque pixels of one color.
    fn run(rgb: [u8; 3], n: usize) -> Vec<u8> {
        [rgb[0], rgb[1], rgb[2], 255].repeat(n)
    }

    /// Pixels laid out so that a stride-5 sampler hits each color `samples` times.
    fn slots(colors: &[([u8; 3], usize)]) -> Vec<u8> {
        colors
            .iter()
            .flat_map(|&(rgb, samples)| run(rgb, samples * PALETTE_STRIDE))
            .collect()
    }

    #[test]
    fn test_dominant_majority() {
        let mut data = run([66, 135, 245], 90);
        data.extend(run([10, 200, 30], 10));
        let pixels = PixelBuffer::new(10, 10, &data).unwrap();
        assert_eq!(extract_dominant_color(&pixels), hex("#4088f8"));
    }

    #[test]
    fn test_dominant_tie_keeps_first_seen() {
        // Stride 4: samples alternate between the two colors.
        let mut data = Vec::new();
        for i in 0..8 {
            let rgb = if i % 2 == 0 { [0, 0, 200] } else { [200, 0, 0] };
            data.extend(run(rgb, DOMINANT_STRIDE));
        }
        let pixels = PixelBuffer::new(32, 1, &data).unwrap();
        assert_eq!(extract_dominant_color(&pixels), hex("#0000c8"));
    }

    #[test]
    fn test_transparent_image() {
        let data = [255, 0, 0, 0].repeat(64);
        let pixels = PixelBuffer::new(8, 8, &data).unwrap();
        assert_eq!(dominant_color(&pixels), None);
        assert_eq!(extract_dominant_color(&pixels), HexColor::BLACK);
        assert!(extract_palette(&pixels, 5).is_empty());
    }

    #[test]
    fn test_empty_image() {
        let pixels = PixelBuffer::new(0, 0, &[]).unwrap();
        assert_eq!(extract_dominant_color(&pixels).to_string(), "#000000");
        assert!(extract_palette(&pixels, 3).is_empty());
    }

    #[test]
    fn test_palette_diversity() {
        let data = slots(&[
            ([200, 40, 40], 40),
            ([208, 40, 40], 30),
            ([40, 200, 40], 20),
            ([40, 208, 40], 15),
            ([40, 40, 200], 10),
            ([40, 40, 208], 5),
        ]);
        let pixels = PixelBuffer::new(600, 1, &data).unwrap();
        let palette = extract_palette(&pixels, 3);
        assert_eq!(palette, [hex("#c82828"), hex("#28c828"), hex("#2828c8")]);
    }

    #[test]
    fn test_palette_short_when_image_is_flat() {
        let data = slots(&[([120, 120, 120], 10), ([128, 120, 120], 5)]);
        let pixels = PixelBuffer::new(75, 1, &data).unwrap();
        assert_eq!(extract_palette(&pixels, 5), [hex("#787878")]);
    }

    #[test]
    fn test_palette_only_considers_top_candidates() {
        // The distinct blue is the 5th bucket, outside the top 2 * 2.
        let data = slots(&[
            ([200, 0, 0], 50),
            ([208, 0, 0], 40),
            ([216, 0, 0], 30),
            ([224, 0, 0], 20),
            ([0, 0, 200], 10),
        ]);
        let pixels = PixelBuffer::new(750, 1, &data).unwrap();
        let palette = extract_palette(&pixels, 2);
        assert_eq!(palette, [hex("#c80000"), hex("#e00000")]);
    }

    #[test]
    fn test_deterministic() {
        let data: Vec<u8> = (0..400u32)
            .flat_map(|i| [(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8, 255])
            .collect();
        let pixels = PixelBuffer::new(20, 20, &data).unwrap();
        assert_eq!(extract_palette(&pixels, 6), extract_palette(&pixels, 6));
        assert_eq!(extract_dominant_color(&pixels), extract_dominant_color(&pixels));
    }
}
