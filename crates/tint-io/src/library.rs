//! Saved palette library backed by a single JSON document.
//!
//! The whole library is read on [`PaletteLibrary::open`] and rewritten on
//! every mutation. Writes go to a temporary file in the same directory that
//! is then renamed over the original, so a crash never leaves a truncated
//! document behind.
//!
//! ```rust,no_run
//! use tint_io::library::{NewPalette, PaletteLibrary};
//! use tint_harmony::GeneratorState;
//!
//! let mut lib = PaletteLibrary::open("palettes.json")?;
//! let id = lib.save(NewPalette::from(&GeneratorState::default()))?;
//! assert_eq!(lib.get(id).map(|p| p.name.as_str()), Some("Palette 1"));
//! # Ok::<(), tint_io::IoError>(())
//! ```

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tint_core::{HexColor, Palette};
use tint_harmony::{GeneratorState, HarmonyType};
use tracing::{debug, info};

use crate::{IoError, IoResult};

/// A palette stored in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    /// Library-assigned id, unique for the lifetime of the file.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Base color the palette was generated from.
    pub base_color: HexColor,
    /// Harmony rule used.
    pub harmony_type: HarmonyType,
    /// Requested number of colors.
    pub color_count: usize,
    /// The colors themselves.
    pub colors: Palette,
    /// Creation time, Unix seconds.
    pub date_created: u64,
}

/// A palette that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPalette {
    /// Display name; blank means "pick a default".
    pub name: String,
    /// Base color.
    pub base_color: HexColor,
    /// Harmony rule.
    pub harmony_type: HarmonyType,
    /// Requested number of colors.
    pub color_count: usize,
    /// Colors.
    pub colors: Palette,
    /// Creation time; `None` stamps the current time.
    pub date_created: Option<u64>,
}

impl From<&GeneratorState> for NewPalette {
    fn from(state: &GeneratorState) -> Self {
        Self {
            name: state.name.clone(),
            base_color: state.base_color,
            harmony_type: state.harmony,
            color_count: state.color_count,
            colors: state.palette.clone(),
            date_created: None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    next_id: u64,
    palettes: Vec<SavedPalette>,
}

/// JSON-file palette store.
#[derive(Debug)]
pub struct PaletteLibrary {
    path: PathBuf,
    doc: Document,
}

impl PaletteLibrary {
    /// Opens the library at `path`. A missing file is an empty library;
    /// nothing is written until the first mutation.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<Document>(&bytes).map_err(|source| {
                IoError::InvalidLibrary {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Document::default(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), palettes = doc.palettes.len(), "opened library");
        Ok(Self { path, doc })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stores `palette` and returns its id.
    ///
    /// A blank name becomes `"Palette N"` where N is one more than the
    /// number of palettes already stored.
    pub fn save(&mut self, palette: NewPalette) -> IoResult<u64> {
        let id = self.next_id();
        let name = if palette.name.trim().is_empty() {
            format!("Palette {}", self.count() + 1)
        } else {
            palette.name
        };
        let saved = SavedPalette {
            id,
            name,
            base_color: palette.base_color,
            harmony_type: palette.harmony_type,
            color_count: palette.color_count,
            colors: palette.colors,
            date_created: palette.date_created.unwrap_or_else(unix_now),
        };

        info!(id, name = %saved.name, "palette added");
        self.doc.palettes.push(saved);
        self.doc.next_id = id + 1;
        self.persist()?;
        Ok(id)
    }

    /// Replaces the stored palette with the same id.
    pub fn update(&mut self, palette: SavedPalette) -> IoResult<()> {
        let slot = self
            .doc
            .palettes
            .iter_mut()
            .find(|p| p.id == palette.id)
            .ok_or(IoError::PaletteNotFound(palette.id))?;
        info!(id = palette.id, "palette updated");
        *slot = palette;
        self.persist()
    }

    /// Palette by id.
    pub fn get(&self, id: u64) -> Option<&SavedPalette> {
        self.doc.palettes.iter().find(|p| p.id == id)
    }

    /// All palettes in the order they were saved.
    pub fn all(&self) -> &[SavedPalette] {
        &self.doc.palettes
    }

    /// Removes a palette. Returns `false` if no palette had that id.
    pub fn delete(&mut self, id: u64) -> IoResult<bool> {
        let before = self.doc.palettes.len();
        self.doc.palettes.retain(|p| p.id != id);
        if self.doc.palettes.len() == before {
            debug!(id, "delete: no such palette");
            return Ok(false);
        }
        info!(id, "palette removed");
        self.persist()?;
        Ok(true)
    }

    /// Removes every palette. Ids keep counting up.
    pub fn clear(&mut self) -> IoResult<()> {
        let removed = self.doc.palettes.len();
        self.doc.palettes.clear();
        info!(removed, "library cleared");
        self.persist()
    }

    /// Number of stored palettes.
    pub fn count(&self) -> usize {
        self.doc.palettes.len()
    }

    /// `true` when at least one palette is stored.
    pub fn has_palettes(&self) -> bool {
        !self.doc.palettes.is_empty()
    }

    fn next_id(&self) -> u64 {
        let max = self.doc.palettes.iter().map(|p| p.id).max().unwrap_or(0);
        self.doc.next_id.max(max + 1)
    }

    fn persist(&self) -> IoResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.doc)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!(path = %self.path.display(), "library written");
        Ok(())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
