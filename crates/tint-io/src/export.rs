//! Palette export as stylesheet and config snippets.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tint_core::HexColor;

use crate::IoResult;
use crate::library::SavedPalette;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "color";

/// Output format for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One hex color per line.
    #[default]
    Plain,
    /// `:root` custom properties.
    Css,
    /// SCSS variables.
    Scss,
    /// Tailwind `theme.extend.colors` module.
    Tailwind,
    /// JSON array of hex strings.
    Json,
}

impl ExportFormat {
    /// All formats.
    pub const ALL: [ExportFormat; 5] = [
        Self::Plain,
        Self::Css,
        Self::Scss,
        Self::Tailwind,
        Self::Json,
    ];

    /// Lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown export format: {s}"))
    }
}

/// Renders `colors` in `format`. Numbering starts at 1.
///
/// `prefix` names CSS and SCSS variables (`--{prefix}-1`, `${prefix}-1`);
/// the other formats ignore it.
pub fn export(colors: &[HexColor], format: ExportFormat, prefix: &str) -> IoResult<String> {
    let mut out = String::new();
    match format {
        ExportFormat::Plain => {
            for c in colors {
                let _ = writeln!(out, "{c}");
            }
        }
        ExportFormat::Css => {
            out.push_str(":root {\n");
            for (i, c) in colors.iter().enumerate() {
                let _ = writeln!(out, "  --{prefix}-{}: {c};", i + 1);
            }
            out.push('}');
        }
        ExportFormat::Scss => {
            let lines: Vec<String> = colors
                .iter()
                .enumerate()
                .map(|(i, c)| format!("${prefix}-{}: {c};", i + 1))
                .collect();
            out = lines.join("\n");
        }
        ExportFormat::Tailwind => {
            out.push_str("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
            let entries: Vec<String> = colors
                .iter()
                .enumerate()
                .map(|(i, c)| format!("        'color{}': '{c}'", i + 1))
                .collect();
            out.push_str(&entries.join(",\n"));
            if !entries.is_empty() {
                out.push('\n');
            }
            out.push_str("      }\n    }\n  }\n}");
        }
        ExportFormat::Json => out = serde_json::to_string_pretty(colors)?,
    }
    Ok(out)
}

/// Pretty JSON for one saved palette, all fields included.
pub fn export_saved(palette: &SavedPalette) -> IoResult<String> {
    Ok(serde_json::to_string_pretty(palette)?)
}

/// Pretty JSON array of saved palettes.
pub fn export_saved_all(palettes: &[SavedPalette]) -> IoResult<String> {
    Ok(serde_json::to_string_pretty(palettes)?)
}
