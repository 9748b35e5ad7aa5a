//! Modes command

use anyhow::Result;
use layermix_ops::BlendMode;

pub fn run() -> Result<()> {
    for mode in BlendMode::ALL {
        println!("{:<14} {}", mode.name(), mode.description());
    }
    Ok(())
}
