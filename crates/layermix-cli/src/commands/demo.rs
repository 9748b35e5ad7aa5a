//! Demo command
//!
//! Writes one sample image per catalog mode, blending a horizontal
//! against a vertical gradient so every mode's character is visible.

use crate::DemoArgs;
use anyhow::Result;
use layermix_core::ImageData;
use layermix_ops::{blend, BlendMode, BlendOptions};
use ndarray::IxDyn;

fn horizontal_gradient(size: usize) -> ImageData {
    let span = size.saturating_sub(1).max(1) as f32;
    ImageData::from_shape_fn(IxDyn(&[size, size]), |d| d[1] as f32 / span)
}

fn vertical_gradient(size: usize) -> ImageData {
    let span = size.saturating_sub(1).max(1) as f32;
    ImageData::from_shape_fn(IxDyn(&[size, size]), |d| d[0] as f32 / span)
}

pub fn run(args: DemoArgs, verbose: bool) -> Result<()> {
    std::fs::create_dir_all(&args.output)?;

    let base = horizontal_gradient(args.size);
    let top = vertical_gradient(args.size);
    let opts = BlendOptions::default();

    for mode in BlendMode::ALL {
        let out = blend(mode, &base, &top, &opts)?;
        let path = args.output.join(format!("{}.png", mode.name()));
        super::save_image(&path, &out)?;
        if verbose {
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
