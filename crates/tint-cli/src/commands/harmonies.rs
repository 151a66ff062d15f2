//! List harmony types

use anyhow::Result;
use tint_harmony::harmony_types;

pub fn run(verbose: u8) -> Result<()> {
    for info in harmony_types() {
        if verbose > 0 {
            println!("{:<20} {}", info.id, info.name);
        } else {
            println!("{}", info.id);
        }
    }
    Ok(())
}
