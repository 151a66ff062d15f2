//! Extract colors from images

use crate::ExtractArgs;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tint_core::HexColor;
use tint_extract::{extract_dominant_color, extract_palette};
use tint_io::{export, load_pixels};
use tracing::{debug, info, trace};

use super::emit;

pub fn run(args: ExtractArgs, config: &Config, verbose: u8) -> Result<()> {
    trace!(inputs = ?args.inputs, dominant = args.dominant, "extract::run");

    let files = expand_inputs(&args.inputs)?;
    let count = args.count.unwrap_or(config.default_count);
    info!(files = files.len(), count, "extracting");

    // Each image is independent; results are collected in input order.
    let results: Vec<(PathBuf, Result<Vec<HexColor>>)> = files
        .into_par_iter()
        .map(|path| {
            let colors = extract_file(&path, count, args.dominant);
            (path, colors)
        })
        .collect();

    let prefix = args.prefix.as_deref().unwrap_or(&config.export_prefix);
    let multiple = results.len() > 1;
    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(colors) => {
                if multiple || verbose > 0 {
                    println!("{}:", path.display());
                }
                emit(&export(&colors, args.format, prefix)?, None)?;
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {e:#}");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} files failed");
    }
    Ok(())
}

fn extract_file(path: &Path, count: usize, dominant: bool) -> Result<Vec<HexColor>> {
    let image = load_pixels(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    let pixels = image.pixels()?;
    debug!(path = %path.display(), width = image.width, height = image.height, "decoded");
    if dominant {
        Ok(vec![extract_dominant_color(&pixels)])
    } else {
        Ok(extract_palette(&pixels, count))
    }
}

/// Expand glob patterns; plain paths pass through unchanged.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.contains(['*', '?', '[']) {
            let matched: Vec<PathBuf> = glob::glob(input)
                .with_context(|| format!("Bad pattern: {input}"))?
                .filter_map(|r| r.ok())
                .collect();
            if matched.is_empty() {
                bail!("No files match pattern: {input}");
            }
            files.extend(matched);
        } else {
            files.push(PathBuf::from(input));
        }
    }
    Ok(files)
}
