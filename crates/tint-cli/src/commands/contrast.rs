//! Brightness and text color report

use crate::ContrastArgs;
use anyhow::Result;
use tracing::trace;
use tint_core::{contrast_color, contrast_ratio, is_color_light, relative_luminance};

use super::parse_color;

pub fn run(args: ContrastArgs) -> Result<()> {
    trace!(color = %args.color, "contrast::run");
    let color = parse_color(&args.color)?;
    let other = match args.against.as_deref() {
        Some(text) => parse_color(text)?,
        None => contrast_color(&color),
    };

    println!("color:      {color}");
    println!("light:      {}", is_color_light(&color));
    println!("text color: {}", contrast_color(&color));
    println!("luminance:  {:.4}", relative_luminance(&color));
    println!("ratio:      {:.2}:1 against {other}", contrast_ratio(&color, &other));
    Ok(())
}
