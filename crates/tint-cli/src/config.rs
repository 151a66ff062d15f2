//! YAML configuration.
//!
//! Looked up in order: `--config` / `$TINT_CONFIG`, then `tint.yaml` in the
//! working directory. With neither present the defaults apply. Every field
//! is optional in the file.
//!
//! ```yaml
//! default_harmony: triadic
//! default_count: 6
//! library: palettes/tint.json
//! export_prefix: brand
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tint_harmony::HarmonyType;
use tint_io::export::DEFAULT_PREFIX;
use tracing::debug;

/// Config file picked up from the working directory.
pub const LOCAL_CONFIG: &str = "tint.yaml";

/// Library file used when none is configured.
pub const DEFAULT_LIBRARY: &str = "tint-palettes.json";

/// CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Harmony used when `generate` gets no `--type`.
    pub default_harmony: HarmonyType,
    /// Color count used when no `-n` is given.
    pub default_count: usize,
    /// Palette library path.
    pub library: PathBuf,
    /// Variable prefix for CSS and SCSS export.
    pub export_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_harmony: HarmonyType::default(),
            default_count: 5,
            library: PathBuf::from(DEFAULT_LIBRARY),
            export_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Resolves and loads the active config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let local = Path::new(LOCAL_CONFIG);
        if local.is_file() {
            return Self::from_file(local);
        }
        debug!("no config file, using defaults");
        Ok(Self::default())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.default_count == 0 {
            bail!("default_count must be at least 1");
        }
        Ok(config)
    }
}
