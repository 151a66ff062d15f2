//! Image file decoding into RGBA pixels for extraction.
//!
//! Anything larger than [`MAX_DIMENSION`] on either side is scaled down so
//! the longer side is exactly [`MAX_DIMENSION`], preserving aspect ratio.
//! Sampling a smaller image keeps extraction fast without changing which
//! colors dominate.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader};
use tint_extract::PixelBuffer;
use tracing::debug;

use crate::IoResult;

/// Longest side after decoding.
pub const MAX_DIMENSION: u32 = 500;

/// Owned RGBA8 pixels ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA bytes.
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Borrows the pixels as a [`PixelBuffer`].
    pub fn pixels(&self) -> IoResult<PixelBuffer<'_>> {
        Ok(PixelBuffer::new(self.width, self.height, &self.rgba)?)
    }
}

/// Target size for a `width x height` image.
///
/// Images within [`MAX_DIMENSION`] are left alone. Otherwise the longer
/// side becomes [`MAX_DIMENSION`] and the shorter is scaled and rounded
/// (never below 1). Square images take the height branch.
pub fn scaled_size(width: u32, height: u32) -> (u32, u32) {
    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return (width, height);
    }
    let scale = |side: u32, longer: u32| {
        let v = (f64::from(side) * (f64::from(MAX_DIMENSION) / f64::from(longer)) + 0.5).floor();
        (v as u32).max(1)
    };
    if width > height {
        (MAX_DIMENSION, scale(height, width))
    } else {
        (scale(width, height), MAX_DIMENSION)
    }
}

/// Decodes an image file, guessing the format from its contents.
pub fn load_pixels<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let path = path.as_ref();
    debug!(path = %path.display(), "decoding image");
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(to_rgba(img))
}

/// Decodes an in-memory image.
pub fn decode_pixels(bytes: &[u8]) -> IoResult<DecodedImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(to_rgba(img))
}

fn to_rgba(img: DynamicImage) -> DecodedImage {
    let (width, height) = (img.width(), img.height());
    let (w, h) = scaled_size(width, height);
    let rgba = img.into_rgba8();
    let rgba = if (w, h) == (width, height) {
        rgba
    } else {
        debug!(width, height, w, h, "downscaling");
        imageops::resize(&rgba, w, h, FilterType::Triangle)
    };
    DecodedImage {
        width: w,
        height: h,
        rgba: rgba.into_raw(),
    }
}
