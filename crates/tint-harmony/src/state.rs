//! Generator state as an immutable snapshot plus a pure reducer.
//!
//! Front ends hold a [`GeneratorState`], feed user input through
//! [`GeneratorState::reduce`] and render whatever comes back. Rejected
//! input (an invalid hex string, a count outside the allowed range) leaves
//! the state untouched.
//!
//! ```rust
//! use tint_harmony::{GeneratorAction, GeneratorState, HarmonyType};
//!
//! let state = GeneratorState::default()
//!     .reduce(GeneratorAction::SetBaseColor("F00".into()))
//!     .reduce(GeneratorAction::SetHarmony(HarmonyType::Triadic))
//!     .reduce(GeneratorAction::SetColorCount(3));
//!
//! assert_eq!(state.palette.to_string(), "#ff0000, #00ff00, #0000ff");
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tint_core::{HexColor, Palette};
use tracing::trace;

use crate::{HarmonyType, generate};

/// Counts a front end may select.
pub const COUNT_RANGE: RangeInclusive<usize> = 3..=10;

/// Initial base color.
pub const DEFAULT_BASE: HexColor = HexColor::from_rgb(0x42, 0x87, 0xf5);

/// Initial color count.
pub const DEFAULT_COUNT: usize = 5;

/// A user intent applied to [`GeneratorState`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorAction {
    /// Hex text as typed; a missing `#` is added. Ignored unless valid.
    SetBaseColor(String),
    /// Switch harmony rule.
    SetHarmony(HarmonyType),
    /// Ignored outside [`COUNT_RANGE`].
    SetColorCount(usize),
    /// One more color, up to the top of [`COUNT_RANGE`].
    Increment,
    /// One fewer color, down to the bottom of [`COUNT_RANGE`].
    Decrement,
    /// Name used when the palette is saved.
    SetName(String),
    /// Recompute the palette from the current inputs.
    Regenerate,
    /// Restore a saved palette; its colors are taken as stored.
    Load {
        /// Saved base color.
        base_color: HexColor,
        /// Saved harmony rule.
        harmony: HarmonyType,
        /// Saved colors.
        colors: Palette,
    },
}

/// Snapshot of the generator inputs and the palette they produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorState {
    /// Normalized base color.
    pub base_color: HexColor,
    /// Active harmony rule.
    pub harmony: HarmonyType,
    /// Number of colors, within [`COUNT_RANGE`].
    pub color_count: usize,
    /// Palette name; may be empty.
    pub name: String,
    /// Current palette.
    pub palette: Palette,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, HarmonyType::default(), DEFAULT_COUNT)
    }
}

impl GeneratorState {
    /// Creates a state and generates its palette. `count` is clamped to
    /// [`COUNT_RANGE`].
    pub fn new(base_color: HexColor, harmony: HarmonyType, count: usize) -> Self {
        let color_count = count.clamp(*COUNT_RANGE.start(), *COUNT_RANGE.end());
        Self {
            base_color,
            harmony,
            color_count,
            name: String::new(),
            palette: generate(&base_color, harmony, color_count),
        }
    }

    /// Applies `action`, returning the next state.
    pub fn reduce(&self, action: GeneratorAction) -> Self {
        trace!(?action, "reduce");
        let mut next = self.clone();
        match action {
            GeneratorAction::SetBaseColor(text) => {
                let text = if !text.is_empty() && !text.starts_with('#') {
                    format!("#{text}")
                } else {
                    text
                };
                match HexColor::parse(&text) {
                    Ok(color) => next.base_color = color,
                    Err(_) => return next,
                }
            }
            GeneratorAction::SetHarmony(harmony) => next.harmony = harmony,
            GeneratorAction::SetColorCount(count) => {
                if !COUNT_RANGE.contains(&count) {
                    return next;
                }
                next.color_count = count;
            }
            GeneratorAction::Increment => {
                if next.color_count >= *COUNT_RANGE.end() {
                    return next;
                }
                next.color_count += 1;
            }
            GeneratorAction::Decrement => {
                if next.color_count <= *COUNT_RANGE.start() {
                    return next;
                }
                next.color_count -= 1;
            }
            GeneratorAction::SetName(name) => {
                next.name = name;
                return next;
            }
            GeneratorAction::Regenerate => {}
            GeneratorAction::Load {
                base_color,
                harmony,
                colors,
            } => {
                next.base_color = base_color;
                next.harmony = harmony;
                if COUNT_RANGE.contains(&colors.len()) {
                    next.color_count = colors.len();
                }
                next.palette = colors;
                return next;
            }
        }
        next.palette = generate(&next.base_color, next.harmony, next.color_count);
        next
    }

    /// `true` when [`GeneratorAction::Increment`] would change the count.
    pub fn can_increment(&self) -> bool {
        self.color_count < *COUNT_RANGE.end()
    }

    /// `true` when [`GeneratorAction::Decrement`] would change the count.
    pub fn can_decrement(&self) -> bool {
        self.color_count > *COUNT_RANGE.start()
    }
}
