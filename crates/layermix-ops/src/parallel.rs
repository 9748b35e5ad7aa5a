//! Parallel blending using Rayon.
//!
//! Blend formulas have no cross-element dependencies, so the elementwise
//! stages of the pipeline split across threads trivially. This module
//! provides a parallel version of the composed operation for large arrays;
//! the shape-reconciliation stages are shared with the sequential pipeline.
//!
//! # Example
//!
//! ```rust
//! use ndarray::{ArrayD, IxDyn};
//! use layermix_ops::{parallel, BlendMode, BlendOptions};
//!
//! let a = ArrayD::from_elem(IxDyn(&[256, 256, 3]), 0.5);
//! let b = ArrayD::from_elem(IxDyn(&[256, 256, 3]), 0.5);
//! let out = parallel::blend(BlendMode::Screen, &a, &b, &BlendOptions::default()).unwrap();
//! assert!((out[[0, 0, 0]] - 0.75).abs() < 1e-6);
//! ```

use layermix_core::{lerp, Error, ImageData, Result};
use ndarray::Zip;
use tracing::trace;

use crate::modes::BlendMode;
use crate::pipeline::BlendOptions;
use crate::{clip, reconcile};

/// Parallel version of [`crate::blend`].
///
/// Semantics are identical to the sequential pipeline; only the elementwise
/// stages run on the Rayon thread pool.
///
/// # Errors
///
/// The same shape errors as [`crate::blend`].
pub fn blend(
    mode: BlendMode,
    a: &ImageData,
    b: &ImageData,
    opts: &BlendOptions,
) -> Result<ImageData> {
    trace!(mode = mode.name(), a = ?a.shape(), b = ?b.shape(), "par blend");

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
        .par_map_collect(|&x, &y| mode.value(x, y));

    if let Some(amount) = opts.fade {
        if amount != 1.0 {
            ab = Zip::from(&a)
                .and(&ab)
                .par_map_collect(|&x, &y| lerp(x, y, amount));
        }
    }
    if let Some(weights) = &opts.mask {
        if weights.shape() != ab.shape() {
            return Err(Error::mask_shape_mismatch(weights.shape(), ab.shape()));
        }
        ab = Zip::from(&a)
            .and(&ab)
            .and(weights)
            .par_map_collect(|&x, &y, &m| lerp(x, y, m));
    }
    if mode.clips() {
        ab.par_mapv_inplace(clip::clip_value);
    }
    Ok(ab)
}
