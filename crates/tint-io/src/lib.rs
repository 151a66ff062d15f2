//! # tint-io
//!
//! File-facing pieces of tint: decoding images into pixels, the saved
//! palette library, and export formats.
//!
//! # Modules
//!
//! - [`decode`] - image files to RGBA with a 500px size cap
//! - [`library`] - JSON-backed palette store
//! - [`export`] - CSS, SCSS, Tailwind and JSON snippets
//!
//! # Example
//!
//! ```rust,no_run
//! use tint_io::decode::load_pixels;
//! use tint_extract::extract_palette;
//!
//! let image = load_pixels("photo.jpg")?;
//! let colors = extract_palette(&image.pixels()?, 5);
//! # Ok::<(), tint_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod decode;
mod error;
pub mod export;
pub mod library;

pub use decode::{DecodedImage, decode_pixels, load_pixels};
pub use error::{IoError, IoResult};
pub use export::{ExportFormat, export};
pub use library::{NewPalette, PaletteLibrary, SavedPalette};
