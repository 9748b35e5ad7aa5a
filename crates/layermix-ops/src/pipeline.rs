//! The modifier pipeline wrapped around every blend mode.
//!
//! Each published operation is the same fixed composition:
//!
//! 1. [`reconcile::match_size`] pads the operands to one size;
//! 2. [`reconcile::colorize`] promotes a grayscale operand to three
//!    channels (skipped via [`BlendOptions::colorize`]);
//! 3. the raw [`BlendMode`] formula runs elementwise;
//! 4. [`mix::fade`] blends the result back toward the base by the scalar
//!    fade, when one is given;
//! 5. [`mix::mask`] does the same per pixel, when a mask is given;
//! 6. [`clip::clip_in_place`] clamps the final values into [0, 1], for
//!    modes whose formula can overshoot.
//!
//! Clipping runs last so it sees the final value including fade and mask
//! effects; reconciliation runs first because the formula needs exact shape
//! agreement. Fade and mask mix against the *reconciled* base array: when
//! the inputs needed no reconciliation this is exactly the array the caller
//! passed, and when they did, it is the only shape-coherent reference.
//!
//! # Example
//!
//! ```rust
//! use ndarray::{ArrayD, IxDyn};
//! use layermix_ops::{blend, BlendMode, BlendOptions};
//!
//! let base = ArrayD::from_elem(IxDyn(&[3, 3]), 0.5);
//! let top = ArrayD::from_elem(IxDyn(&[3, 3]), 0.5);
//! let out = blend(BlendMode::Multiply, &base, &top, &BlendOptions::default()).unwrap();
//! assert!((out[[0, 0]] - 0.25).abs() < 1e-6);
//! ```

use layermix_core::{Error, ImageData, Result};
use ndarray::Zip;
use tracing::trace;

use crate::modes::BlendMode;
use crate::{clip, mix, reconcile};

/// Cross-cutting modifiers applied around a blend mode.
///
/// The default is full strength: no fade, no mask, channel promotion on.
#[derive(Debug, Clone)]
pub struct BlendOptions {
    /// How much the blend affects the final output, 0.0 to 1.0.
    /// `None` (and 1.0) mean full effect.
    pub fade: Option<f32>,
    /// Per-pixel effect weights, matching the output shape. 1.0 means the
    /// pixel takes the full blend effect, 0.0 leaves it untouched.
    pub mask: Option<ImageData>,
    /// Whether to reconcile channel counts by replicating a grayscale
    /// operand across three channels.
    pub colorize: bool,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            fade: None,
            mask: None,
            colorize: true,
        }
    }
}

/// Blends two arrays with the given mode and modifiers.
///
/// The base array `a` is the bottom layer, the blend array `b` the top
/// layer. Both are borrowed; the result is a fresh array whose shape is the
/// reconciled common shape of the two inputs.
///
/// # Errors
///
/// Fails when the operands' axis counts differ in a way channel promotion
/// cannot resolve, and when a supplied mask does not match the output
/// shape.
pub fn blend(
    mode: BlendMode,
    a: &ImageData,
    b: &ImageData,
    opts: &BlendOptions,
) -> Result<ImageData> {
    trace!(mode = mode.name(), a = ?a.shape(), b = ?b.shape(), "blend");

    let (a, b) = reconcile::match_size(a, b)?;
    let (a, b) = if opts.colorize {
        reconcile::colorize(a, b)?
    } else {
        (a, b)
    };
    if a.shape() != b.shape() {
        return Err(Error::axis_count_mismatch(a.shape(), b.shape()));
    }

    let mut ab = Zip::from(&a)
        .and(&b)
        .map_collect(|&x, &y| mode.value(x, y));

    if let Some(amount) = opts.fade {
        if amount != 1.0 {
            ab = mix::fade(&a, &ab, amount);
        }
    }
    if let Some(weights) = &opts.mask {
        ab = mix::mask(&a, &ab, weights)?;
    }
    if mode.clips() {
        clip::clip_in_place(&mut ab);
    }
    Ok(ab)
}

macro_rules! mode_fns {
    ($($(#[$doc:meta])+ $name:ident => $variant:ident;)+) => {
        $(
            $(#[$doc])+
            ///
            /// Equivalent to [`blend`] with the matching [`BlendMode`];
            /// see there for the full contract.
            pub fn $name(a: &ImageData, b: &ImageData, opts: &BlendOptions) -> Result<ImageData> {
                blend(BlendMode::$variant, a, b, opts)
            }
        )+
    };
}

mode_fns! {
    /// Replaces the base values with the blend values. Doubles as an
    /// opacity filter when faded.
    replace => Replace;

    /// Keeps the value from the blend image wherever it is darker.
    darker => Darker;

    /// Keeps the value from the blend image wherever it is lighter.
    lighter => Lighter;

    /// Multiplies the two images, leading to darker values. Useful for
    /// shadows and similar situations.
    multiply => Multiply;

    /// Inverse-multiplies the two images, leading to brighter values; the
    /// opposite of [`multiply`].
    screen => Screen;

    /// Like [`multiply`], but darker and with higher contrast.
    color_burn => ColorBurn;

    /// Like [`multiply`], but darker, less saturated than [`color_burn`],
    /// and with more contrast in the shadows.
    linear_burn => LinearBurn;

    /// Like [`screen`], but brighter and with decreased contrast.
    color_dodge => ColorDodge;

    /// Like [`screen`], but with stronger results.
    linear_dodge => LinearDodge;

    /// Takes the absolute difference of the two images. Often useful for
    /// complex patterns or when aligning two images.
    difference => Difference;

    /// Like [`difference`], tending toward gray rather than black.
    exclusion => Exclusion;

    /// The blend image as a harsh light shining on the base image.
    hard_light => HardLight;

    /// Thresholds every value to pure black or white, increasing
    /// saturation and contrast. Best used faded or masked.
    hard_mix => HardMix;

    /// Combines linear dodge and linear burn.
    linear_light => LinearLight;

    /// Combines screen and multiply.
    overlay => Overlay;

    /// Combines lighten and darken.
    pin_light => PinLight;

    /// Like [`overlay`], biased toward the blend value.
    soft_light => SoftLight;

    /// Combines color dodge and color burn; good for color grading when
    /// faded.
    vivid_light => VividLight;
}
