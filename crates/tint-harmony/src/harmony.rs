//! Harmony type identifiers and display names.
//!
//! The set is closed: eight rules, listed in [`HarmonyType::ALL`] in the
//! order front ends present them. Identifiers are the camelCase strings
//! used in saved palettes (`"splitComplementary"`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HarmonyError;

/// A named rule for deriving related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarmonyType {
    /// Hues spread across a 120 degree arc centered on the base.
    #[default]
    Analogous,
    /// Same hue; darker on one side, more saturated on the other.
    Monochromatic,
    /// Base hue and its opposite, each fanned out in lightness.
    Complementary,
    /// Base plus the two hues 30 degrees either side of its complement.
    SplitComplementary,
    /// Base, its two 30 degree neighbours, complement and complement + 30.
    Compound,
    /// Three hues 120 degrees apart.
    Triadic,
    /// Four hues 90 degrees apart.
    Square,
    /// Lightness sweep from 5 to 95 at the base hue.
    Shades,
}

/// Identifier/name pair for populating choice lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HarmonyInfo {
    /// Stable identifier, e.g. `"splitComplementary"`.
    pub id: &'static str,
    /// Human-readable name, e.g. `"Split Complementary"`.
    pub name: &'static str,
}

impl HarmonyType {
    /// All harmony types in declaration order.
    pub const ALL: [HarmonyType; 8] = [
        Self::Analogous,
        Self::Monochromatic,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Compound,
        Self::Triadic,
        Self::Square,
        Self::Shades,
    ];

    /// Stable identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "splitComplementary",
            Self::Compound => "compound",
            Self::Triadic => "triadic",
            Self::Square => "square",
            Self::Shades => "shades",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Monochromatic => "Monochromatic",
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split Complementary",
            Self::Compound => "Compound",
            Self::Triadic => "Triadic",
            Self::Square => "Square",
            Self::Shades => "Shades",
        }
    }

    /// Looks up a type by identifier. Matching is exact.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Identifier and name together.
    pub const fn info(self) -> HarmonyInfo {
        HarmonyInfo {
            id: self.id(),
            name: self.name(),
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for HarmonyType {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| HarmonyError::UnknownHarmony(s.to_string()))
    }
}

/// Display name for an identifier; unknown identifiers come back unchanged.
pub fn harmony_name(id: &str) -> String {
    HarmonyType::from_id(id)
        .map(|t| t.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Every harmony type as `{id, name}`, in declaration order.
pub fn harmony_types() -> Vec<HarmonyInfo> {
    HarmonyType::ALL.iter().map(|t| t.info()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for t in HarmonyType::ALL {
            assert_eq!(HarmonyType::from_id(t.id()), Some(t));
            assert_eq!(t.to_string().parse::<HarmonyType>().unwrap(), t);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(harmony_name("splitComplementary"), "Split Complementary");
        assert_eq!(harmony_name("shades"), "Shades");
        assert_eq!(harmony_name("tetradic"), "tetradic");
        assert_eq!(harmony_name(""), "");
    }

    #[test]
    fn test_types_in_declaration_order() {
        let ids: Vec<_> = harmony_types().into_iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            [
                "analogous",
                "monochromatic",
                "complementary",
                "splitComplementary",
                "compound",
                "triadic",
                "square",
                "shades"
            ]
        );
    }

    #[test]
    fn test_from_id_is_exact() {
        assert_eq!(HarmonyType::from_id("Triadic"), None);
        assert_eq!(HarmonyType::from_id("split_complementary"), None);
        assert!("nope".parse::<HarmonyType>().is_err());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&HarmonyType::SplitComplementary).unwrap();
        assert_eq!(json, "\"splitComplementary\"");
        let back: HarmonyType = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(back, HarmonyType::Square);
    }
}
