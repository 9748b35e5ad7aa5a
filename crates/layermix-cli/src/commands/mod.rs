//! Subcommand implementations.

pub mod blend;
pub mod demo;
pub mod modes;

use std::path::Path;

use anyhow::{Context, Result};
use layermix_core::ImageData;

pub(crate) fn load_image(path: &Path) -> Result<ImageData> {
    layermix_io::load(path).with_context(|| format!("failed to load {}", path.display()))
}

pub(crate) fn save_image(path: &Path, data: &ImageData) -> Result<()> {
    layermix_io::save(path, data).with_context(|| format!("failed to save {}", path.display()))
}
