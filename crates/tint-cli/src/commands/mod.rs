//! CLI command implementations

pub mod contrast;
pub mod extract;
pub mod generate;
pub mod harmonies;
pub mod library;

use anyhow::{Context, Result};
use std::path::Path;
use tint_core::HexColor;

/// Parse a user-supplied color, `#` optional.
pub fn parse_color(text: &str) -> Result<HexColor> {
    HexColor::parse(text).with_context(|| format!("Not a hex color: {text}"))
}

/// Print to stdout, or write to `output` when given.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut body = text.to_string();
            if !body.ends_with('\n') {
                body.push('\n');
            }
            std::fs::write(path, body)
                .with_context(|| format!("Failed to write: {}", path.display()))
        }
        None => {
            if text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
            Ok(())
        }
    }
}
