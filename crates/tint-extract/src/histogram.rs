//! Quantized color histogram.
//!
//! Channels are snapped to the nearest multiple of [`QUANT_STEP`] with
//! halves rounding up, so 252..=255 land on 256. Keys keep that value;
//! only [`to_hex`] clamps back to a byte.

use std::collections::HashMap;

use tint_core::HexColor;

/// Quantization step per channel.
pub const QUANT_STEP: u16 = 8;

/// Quantized RGB triple, each channel in `0..=256`.
pub type QuantizedRgb = [u16; 3];

/// One histogram cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBucket {
    /// Quantized color shared by every sample in the bucket.
    pub color: QuantizedRgb,
    /// Number of samples that fell into the bucket.
    pub count: usize,
}

/// Buckets in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct Histogram {
    buckets: Vec<ColorBucket>,
    index: HashMap<QuantizedRgb, usize>,
}

impl Histogram {
    pub fn from_samples(samples: impl Iterator<Item = [u8; 3]>) -> Self {
        let mut hist = Self::default();
        for rgb in samples {
            hist.add(quantize_rgb(rgb));
        }
        hist
    }

    fn add(&mut self, color: QuantizedRgb) {
        match self.index.get(&color) {
            Some(&i) => self.buckets[i].count += 1,
            None => {
                self.index.insert(color, self.buckets.len());
                self.buckets.push(ColorBucket { color, count: 1 });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Largest bucket; the earliest one wins a tie.
    pub fn most_frequent(&self) -> Option<&ColorBucket> {
        self.buckets
            .iter()
            .reduce(|best, b| if b.count > best.count { b } else { best })
    }

    /// Buckets by descending count. The sort is stable, so equal counts
    /// stay in first-seen order.
    pub fn into_ranked(self) -> Vec<ColorBucket> {
        let mut buckets = self.buckets;
        buckets.sort_by(|a, b| b.count.cmp(&a.count));
        buckets
    }
}

/// Snaps one channel to the nearest multiple of [`QUANT_STEP`].
#[inline]
pub fn quantize(v: u8) -> u16 {
    (u16::from(v) + QUANT_STEP / 2) / QUANT_STEP * QUANT_STEP
}

/// [`quantize`] on every channel.
#[inline]
pub fn quantize_rgb([r, g, b]: [u8; 3]) -> QuantizedRgb {
    [quantize(r), quantize(g), quantize(b)]
}

/// Formats a quantized triple, clamping 256 down to 255.
pub fn to_hex([r, g, b]: QuantizedRgb) -> HexColor {
    let byte = |c: u16| c.min(255) as u8;
    HexColor::from_rgb(byte(r), byte(g), byte(b))
}
