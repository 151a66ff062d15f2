//! tint - color palette toolkit
//!
//! Generates harmonious palettes from a base color, extracts palettes from
//! images and manages a local library of saved palettes.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tint_io::ExportFormat;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Color palette toolkit")]
#[command(long_about = "
Generate color palettes from harmony rules or extract them from images.

Examples:
  tint generate 4287f5                      # Analogous, 5 colors
  tint generate '#ff0000' -t triadic -n 6   # Triadic, 6 colors
  tint generate f80 -t shades -f css        # As CSS custom properties
  tint generate 3a7bd5 --save --name Ocean  # Store in the library
  tint extract photo.jpg -n 6               # Palette from an image
  tint extract 'shots/*.png' --dominant     # Dominant color per image
  tint harmonies                            # List harmony types
  tint contrast 4287f5                      # Text color and WCAG ratio
  tint library list
  tint library export 3 -f scss
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Config file (YAML)
    #[arg(long, global = true, env = "TINT_CONFIG")]
    config: Option<PathBuf>,

    /// Palette library file
    #[arg(long, global = true)]
    library: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette from a base color
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Extract colors from images
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),

    /// List harmony types
    Harmonies,

    /// Show brightness and legible text color for a color
    Contrast(ContrastArgs),

    /// Manage saved palettes
    #[command(visible_alias = "lib")]
    Library(LibraryArgs),
}

/// Arguments for the `generate` command.
#[derive(Args)]
struct GenerateArgs {
    /// Base color (#rgb or #rrggbb, '#' optional)
    base: String,

    /// Harmony type id (see `tint harmonies`)
    #[arg(short = 't', long = "type")]
    harmony: Option<String>,

    /// Number of colors
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Output format: plain, css, scss, tailwind, json
    #[arg(short, long, default_value = "plain")]
    format: ExportFormat,

    /// Variable prefix for css/scss output
    #[arg(long)]
    prefix: Option<String>,

    /// Save the palette to the library
    #[arg(short, long)]
    save: bool,

    /// Name for the saved palette
    #[arg(long, requires = "save")]
    name: Option<String>,
}

/// Arguments for the `extract` command.
#[derive(Args)]
struct ExtractArgs {
    /// Image files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Number of colors
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Only report the dominant color
    #[arg(short, long)]
    dominant: bool,

    /// Output format: plain, css, scss, tailwind, json
    #[arg(short, long, default_value = "plain")]
    format: ExportFormat,

    /// Variable prefix for css/scss output
    #[arg(long)]
    prefix: Option<String>,
}

/// Arguments for the `contrast` command.
#[derive(Args)]
struct ContrastArgs {
    /// Color to inspect
    color: String,

    /// Compare against this color instead of the suggested text color
    #[arg(long)]
    against: Option<String>,
}

/// Arguments for the `library` command.
#[derive(Args)]
struct LibraryArgs {
    #[command(subcommand)]
    action: LibraryCommand,
}

#[derive(Subcommand)]
enum LibraryCommand {
    /// List saved palettes
    #[command(visible_alias = "ls")]
    List,

    /// Show one palette
    Show {
        /// Palette id
        id: u64,
    },

    /// Delete one palette
    #[command(visible_alias = "rm")]
    Delete {
        /// Palette id
        id: u64,
    },

    /// Delete every palette
    Clear {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Export one palette, or all of them as JSON
    Export {
        /// Palette id; omit to export the whole library
        id: Option<u64>,

        /// Output format: plain, css, scss, tailwind, json
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Variable prefix for css/scss output
        #[arg(long)]
        prefix: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info,tint=debug,tint_core=debug,tint_harmony=debug,tint_extract=debug,tint_io=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(library) = cli.library {
        config.library = library;
    }

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &config, cli.verbose),
        Commands::Extract(args) => commands::extract::run(args, &config, cli.verbose),
        Commands::Harmonies => commands::harmonies::run(cli.verbose),
        Commands::Contrast(args) => commands::contrast::run(args),
        Commands::Library(args) => commands::library::run(args.action, &config, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["tint", "generate", "f00", "-t", "triadic", "-n", "6", "-f", "css"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.base, "f00");
                assert_eq!(args.harmony.as_deref(), Some("triadic"));
                assert_eq!(args.count, Some(6));
                assert_eq!(args.format, ExportFormat::Css);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_name_requires_save() {
        assert!(Cli::try_parse_from(["tint", "generate", "f00", "--name", "x"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["tint", "-vv", "harmonies"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
