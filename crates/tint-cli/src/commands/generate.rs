//! Generate a palette from a base color

use crate::GenerateArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use tint_harmony::{HarmonyType, generate_palette, harmony_name};
use tint_io::{NewPalette, PaletteLibrary, export};
use tracing::{info, trace, warn};

use super::{emit, parse_color};

pub fn run(args: GenerateArgs, config: &Config, verbose: u8) -> Result<()> {
    trace!(base = %args.base, harmony = ?args.harmony, "generate::run");

    let harmony = args
        .harmony
        .unwrap_or_else(|| config.default_harmony.id().to_string());
    let count = args.count.unwrap_or(config.default_count);
    let known = HarmonyType::from_id(&harmony);
    if known.is_none() {
        warn!(harmony = %harmony, "unknown harmony type, repeating the base color");
    }

    let palette = generate_palette(&args.base, &harmony, count)
        .with_context(|| format!("Cannot generate from '{}'", args.base))?;

    if verbose > 0 {
        eprintln!("{} palette, {} colors", harmony_name(&harmony), palette.len());
    }
    let prefix = args.prefix.as_deref().unwrap_or(&config.export_prefix);
    emit(&export(&palette, args.format, prefix)?, None)?;

    if args.save {
        let harmony_type =
            known.with_context(|| format!("Cannot save a palette with unknown harmony '{harmony}'"))?;
        let mut library = PaletteLibrary::open(&config.library)
            .with_context(|| format!("Failed to open library: {}", config.library.display()))?;
        let id = library.save(NewPalette {
            name: args.name.unwrap_or_default(),
            base_color: parse_color(&args.base)?,
            harmony_type,
            color_count: count,
            colors: palette,
            date_created: None,
        })?;
        info!(id, library = %config.library.display(), "saved palette");
        eprintln!("Saved as #{id}");
    }
    Ok(())
}
