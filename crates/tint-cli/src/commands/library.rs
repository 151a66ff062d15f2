//! Saved palette management

use crate::LibraryCommand;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use tint_io::export::{export_saved, export_saved_all};
use tint_io::{ExportFormat, PaletteLibrary, SavedPalette, export};
use tracing::{info, trace};

use super::emit;

pub fn run(action: LibraryCommand, config: &Config, verbose: u8) -> Result<()> {
    trace!(library = %config.library.display(), "library::run");
    let mut library = PaletteLibrary::open(&config.library)
        .with_context(|| format!("Failed to open library: {}", config.library.display()))?;

    match action {
        LibraryCommand::List => {
            if !library.has_palettes() {
                println!("No saved palettes");
                return Ok(());
            }
            for p in library.all() {
                print_summary(p, verbose);
            }
        }
        LibraryCommand::Show { id } => {
            let p = library.get(id).with_context(|| format!("No palette with id {id}"))?;
            print_summary(p, 1);
            for c in &p.colors {
                println!("  {c}  text {}", c.contrast());
            }
        }
        LibraryCommand::Delete { id } => {
            if !library.delete(id)? {
                bail!("No palette with id {id}");
            }
            println!("Deleted #{id}");
        }
        LibraryCommand::Clear { yes } => {
            if !yes {
                bail!("Refusing to clear {} palettes without --yes", library.count());
            }
            library.clear()?;
            println!("Library cleared");
        }
        LibraryCommand::Export {
            id,
            format,
            prefix,
            output,
        } => {
            let prefix = prefix.as_deref().unwrap_or(&config.export_prefix);
            let text = match (id, format) {
                (Some(id), ExportFormat::Json) => {
                    export_saved(library.get(id).with_context(|| format!("No palette with id {id}"))?)?
                }
                (Some(id), format) => {
                    let p = library.get(id).with_context(|| format!("No palette with id {id}"))?;
                    export(&p.colors, format, prefix)?
                }
                (None, ExportFormat::Json) => export_saved_all(library.all())?,
                (None, format) => bail!("Exporting the whole library only supports json, not {format}"),
            };
            emit(&text, output.as_deref())?;
            if let Some(path) = output {
                info!(path = %path.display(), "exported");
            }
        }
    }
    Ok(())
}

fn print_summary(p: &SavedPalette, verbose: u8) {
    println!(
        "#{:<4} {:<24} {:<20} {}",
        p.id,
        p.name,
        p.harmony_type.name(),
        p.colors
    );
    if verbose > 0 {
        println!("      base {}, {} colors, created {}", p.base_color, p.color_count, p.date_created);
    }
}
