//! # tint-harmony
//!
//! Deterministic color harmony rules in HSL space.
//!
//! Given a base color, a [`HarmonyType`] and a count, [`generate`] derives
//! exactly `count` related colors. Every rule is a pure function of its
//! inputs; there is no randomness and no shared state.
//!
//! # Modules
//!
//! - [`harmony`] - Harmony identifiers and display names
//! - [`state`] - Immutable generator state and its reducer
//!
//! # Example
//!
//! ```rust
//! use tint_core::HexColor;
//! use tint_harmony::{generate, HarmonyType};
//!
//! let base: HexColor = "#ff0000".parse()?;
//! let palette = generate(&base, HarmonyType::Triadic, 3);
//! assert_eq!(palette.to_string(), "#ff0000, #00ff00, #0000ff");
//! # Ok::<(), tint_core::ColorError>(())
//! ```
//!
//! # Length policy
//!
//! Rules are free to produce a natural number of colors. Afterwards the
//! result is padded with repeats of its last color or truncated so that the
//! caller always gets exactly what was asked for.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod harmony;
mod rules;
pub mod state;

pub use error::{HarmonyError, HarmonyResult};
pub use harmony::{HarmonyInfo, HarmonyType, harmony_name, harmony_types};
pub use state::{GeneratorAction, GeneratorState};

use tint_core::{HexColor, Palette};
use tracing::{debug, trace};

/// Generates exactly `count` colors for `harmony` around `base`.
///
/// A count of zero yields an empty palette.
pub fn generate(base: &HexColor, harmony: HarmonyType, count: usize) -> Palette {
    trace!(%base, %harmony, count, "generate");
    let mut palette = rules::apply(harmony, &rules::Base::new(*base), count);
    palette.fit_to(count);
    palette
}

/// String-typed entry point used at application boundaries.
///
/// `base` is validated and normalized (`"F00"` and `"#ff0000"` are the same
/// color). An unrecognized `harmony` id is tolerated and produces `count`
/// copies of the base color.
///
/// # Errors
///
/// - [`HarmonyError::Color`] when `base` is not a 3- or 6-digit hex color
/// - [`HarmonyError::InvalidCount`] when `count` is zero
pub fn generate_palette(base: &str, harmony: &str, count: usize) -> HarmonyResult<Palette> {
    if count == 0 {
        return Err(HarmonyError::InvalidCount(count));
    }
    let base = HexColor::parse(base)?;

    match HarmonyType::from_id(harmony) {
        Some(harmony) => Ok(generate(&base, harmony, count)),
        None => {
            debug!(harmony, count, "unknown harmony type, repeating base color");
            Ok(std::iter::repeat_n(base, count).collect())
        }
    }
}
