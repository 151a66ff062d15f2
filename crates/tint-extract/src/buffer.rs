//! Borrowed RGBA pixel views.

use crate::{ExtractError, ExtractResult};

/// Alpha below this marks a pixel as transparent; it is never sampled.
pub const ALPHA_CUTOFF: u8 = 128;

/// Read-only view of row-major RGBA8 pixels.
///
/// The length check happens once in [`PixelBuffer::new`]; afterwards every
/// 4-byte chunk is a whole pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wraps `data` as a `width x height` RGBA buffer.
    ///
    /// # Errors
    ///
    /// [`ExtractError::BufferSize`] when `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> ExtractResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(ExtractError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// RGB of every `stride`-th pixel whose alpha is at least [`ALPHA_CUTOFF`].
    ///
    /// Sampling starts at pixel 0. A `stride` of zero is treated as 1.
    pub fn opaque_samples(&self, stride: usize) -> impl Iterator<Item = [u8; 3]> + 'a {
        self.data
            .chunks_exact(4)
            .step_by(stride.max(1))
            .filter(|px| px[3] >= ALPHA_CUTOFF)
            .map(|px| [px[0], px[1], px[2]])
    }
}
