//! The eight generation rules.
//!
//! Each rule works on the base color's integer HSL in `f64` and maps every
//! derived color back through [`hsl_to_hex`]. Wherever a position is meant
//! to *be* the base color, the literal base is emitted instead of a
//! recomputed one, so HSL rounding never drifts the anchor.
//!
//! Rules may return fewer or more colors than asked for (the anchored
//! rules return their anchors verbatim for small counts); the caller fits
//! the result to the requested length.
//!
//! # Clamps
//!
//! | Adjustment | Floor | Ceiling |
//! |------------|-------|---------|
//! | lightness down | 5 | - |
//! | lightness up | - | 95 |
//! | saturation up | - | 100 |
//! | saturation down | 0 | - |

use tint_core::{HexColor, Palette, hsl_to_hex};

use crate::HarmonyType;

const ANALOGOUS_SPAN: f64 = 120.0;
const SPLIT_ANGLE: f64 = 30.0;
const MIN_LIGHTNESS: f64 = 5.0;
const MAX_LIGHTNESS: f64 = 95.0;
const SHADE_MIN: f64 = 5.0;
const SHADE_RANGE: f64 = 90.0;
/// Shade positions closer than this to the base lightness emit the base.
const SHADE_SNAP: f64 = 2.0;

/// Base color with its HSL channels widened for arithmetic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Base {
    pub hex: HexColor,
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Base {
    pub fn new(hex: HexColor) -> Self {
        let hsl = hex.to_hsl();
        Self {
            hex,
            h: f64::from(hsl.h),
            s: f64::from(hsl.s),
            l: f64::from(hsl.l),
        }
    }

    fn complement(&self) -> f64 {
        (self.h + 180.0) % 360.0
    }

    fn with_hue(&self, h: f64) -> HexColor {
        hsl_to_hex(h, self.s, self.l)
    }

    /// Lighter, more saturated variant used by split-complementary and compound.
    fn brighter(&self, h: f64) -> HexColor {
        hsl_to_hex(h, (self.s + 10.0).min(100.0), (self.l + 15.0).min(MAX_LIGHTNESS))
    }

    /// Darker, less saturated counterpart of [`Base::brighter`].
    fn duller(&self, h: f64) -> HexColor {
        hsl_to_hex(h, (self.s - 10.0).max(0.0), (self.l - 15.0).max(MIN_LIGHTNESS))
    }
}

/// Runs the rule for `harmony`. The result is not yet fitted to `count`.
pub(crate) fn apply(harmony: HarmonyType, base: &Base, count: usize) -> Palette {
    match harmony {
        HarmonyType::Analogous => analogous(base, count),
        HarmonyType::Monochromatic => monochromatic(base, count),
        HarmonyType::Complementary => complementary(base, count),
        HarmonyType::SplitComplementary => split_complementary(base, count),
        HarmonyType::Compound => compound(base, count),
        HarmonyType::Triadic => evenly_spaced(base, count, 3),
        HarmonyType::Square => evenly_spaced(base, count, 4),
        HarmonyType::Shades => shades(base, count),
    }
}

fn analogous(base: &Base, count: usize) -> Palette {
    let center = (count % 2 == 1).then_some(count / 2);
    let step = if count > 1 {
        ANALOGOUS_SPAN / (count - 1) as f64
    } else {
        0.0
    };
    let start = base.h - ANALOGOUS_SPAN / 2.0;

    (0..count)
        .map(|i| {
            if Some(i) == center {
                base.hex
            } else {
                let angle = (start + step * i as f64 + 360.0) % 360.0;
                base.with_hue(angle)
            }
        })
        .collect()
}

fn monochromatic(base: &Base, count: usize) -> Palette {
    let odd = count % 2 == 1;
    let middle = count / 2;
    let m = middle as f64;
    let n = count as f64;

    (0..count)
        .map(|i| {
            let fi = i as f64;
            if odd && i == middle {
                return base.hex;
            }
            let darker_half = if odd { i < middle } else { i <= middle };
            if darker_half {
                let adjust = if odd {
                    30.0 * (m - fi) / m
                } else {
                    30.0 * (m - fi + 0.5) / (m + 0.5)
                };
                hsl_to_hex(base.h, base.s, (base.l - adjust).max(MIN_LIGHTNESS))
            } else {
                let adjust = if odd {
                    25.0 * (fi - m) / (n - m - 1.0)
                } else {
                    25.0 * (fi - m) / (n - m - 0.5)
                };
                hsl_to_hex(base.h, (base.s + adjust).min(100.0), base.l)
            }
        })
        .collect()
}

fn complementary(base: &Base, count: usize) -> Palette {
    let complement = base.complement();
    let half = count / 2;
    let hf = half as f64;
    let mut colors = Palette::with_capacity(count);

    if count % 2 == 1 {
        for i in 0..half {
            let adjust = 30.0 * (hf - i as f64) / hf;
            colors.push(hsl_to_hex(base.h, base.s, (base.l - adjust).max(MIN_LIGHTNESS)));
        }
        colors.push(base.hex);
        for i in 0..half {
            let adjust = 30.0 * (i as f64 + 1.0) / hf;
            colors.push(hsl_to_hex(complement, base.s, (base.l + adjust).min(MAX_LIGHTNESS)));
        }
    } else {
        for i in 0..half {
            if i == 0 {
                colors.push(base.hex);
            } else {
                let adjust = 25.0 * i as f64 / (hf - 1.0);
                colors.push(hsl_to_hex(base.h, base.s, (base.l + adjust).min(MAX_LIGHTNESS)));
            }
        }
        for i in 0..half {
            if i == 0 {
                colors.push(base.with_hue(complement));
            } else {
                let adjust = 25.0 * i as f64 / (hf - 1.0);
                colors.push(hsl_to_hex(complement, base.s, (base.l - adjust).max(MIN_LIGHTNESS)));
            }
        }
    }

    colors
}

fn split_complementary(base: &Base, count: usize) -> Palette {
    let complement = base.complement();
    let hues = [
        base.h,
        (complement + SPLIT_ANGLE) % 360.0,
        (complement - SPLIT_ANGLE + 360.0) % 360.0,
    ];
    let anchors = [base.hex, base.with_hue(hues[1]), base.with_hue(hues[2])];

    with_variations(&anchors, count, |i| {
        let hue = hues[i % 3];
        if (i / 3) % 2 == 0 {
            base.brighter(hue)
        } else {
            base.duller(hue)
        }
    })
}

fn compound(base: &Base, count: usize) -> Palette {
    let complement = base.complement();
    let anchors = [
        base.hex,
        base.with_hue((base.h + 30.0) % 360.0),
        base.with_hue((base.h - 30.0 + 360.0) % 360.0),
        base.with_hue(complement),
        base.with_hue((complement + 30.0) % 360.0),
    ];

    with_variations(&anchors, count, |i| {
        let hue = if i % 2 == 0 { base.h } else { complement };
        if (i / 2) % 2 == 0 {
            base.brighter(hue)
        } else {
            base.duller(hue)
        }
    })
}

/// Triadic (`points = 3`) and square (`points = 4`).
fn evenly_spaced(base: &Base, count: usize, points: usize) -> Palette {
    let step = 360.0 / points as f64;
    let hues: Vec<f64> = (0..points)
        .map(|j| (base.h + step * j as f64) % 360.0)
        .collect();
    let anchors: Vec<HexColor> = hues
        .iter()
        .enumerate()
        .map(|(j, &h)| if j == 0 { base.hex } else { base.with_hue(h) })
        .collect();

    with_variations(&anchors, count, |i| {
        let hue = hues[i % points];
        let l = if (i / points) % 2 == 0 {
            (base.l + 20.0).min(MAX_LIGHTNESS)
        } else {
            (base.l - 20.0).max(MIN_LIGHTNESS)
        };
        hsl_to_hex(hue, base.s, l)
    })
}

fn shades(base: &Base, count: usize) -> Palette {
    if count <= 1 {
        return std::iter::repeat_n(base.hex, count).collect();
    }
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let lightness = SHADE_MIN + (SHADE_RANGE * i as f64 / last);
            if (lightness - base.l).abs() < SHADE_SNAP {
                base.hex
            } else {
                hsl_to_hex(base.h, base.s, lightness)
            }
        })
        .collect()
}

/// Anchors verbatim (cut to `count`), then `variation(i)` for each extra slot.
fn with_variations(
    anchors: &[HexColor],
    count: usize,
    variation: impl Fn(usize) -> HexColor,
) -> Palette {
    if count <= anchors.len() {
        return anchors[..count].iter().copied().collect();
    }
    anchors
        .iter()
        .copied()
        .chain((0..count - anchors.len()).map(variation))
        .collect()
}
