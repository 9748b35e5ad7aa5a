//! Blend command

use crate::BlendArgs;
use anyhow::Result;
use layermix_ops::{blend, BlendMode, BlendOptions};
use tracing::debug;

pub fn run(args: BlendArgs, verbose: bool) -> Result<()> {
    let mode: BlendMode = args.mode.parse()?;
    let base = super::load_image(&args.base)?;
    let top = super::load_image(&args.blend)?;
    let mask = args
        .mask
        .as_deref()
        .map(super::load_image)
        .transpose()?;

    debug!(mode = %mode, fade = ?args.fade, masked = mask.is_some(), "running blend");

    if verbose {
        println!(
            "Blending {} with {} using '{}'",
            args.base.display(),
            args.blend.display(),
            mode
        );
    }

    let opts = BlendOptions {
        fade: args.fade,
        mask,
        colorize: !args.no_colorize,
    };
    let out = blend(mode, &base, &top, &opts)?;

    super::save_image(&args.output, &out)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
