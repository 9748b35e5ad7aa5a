//! The pixel array type shared by every layermix crate.
//!
//! Image data is a dynamic-dimensional array of `f32` values, normalized to
//! [0, 1] by convention. The convention is not enforced by the type; blend
//! formulas assume it and the clipping stage restores it where a formula can
//! overshoot.
//!
//! The axis count is unconstrained. A final axis of extent 3, when present,
//! is treated as the color-channel axis: a `(H, W)` array is grayscale, a
//! `(H, W, 3)` array is RGB, and higher-rank layouts (stacks of frames,
//! batches) work the same way.

use ndarray::ArrayD;

/// Pixel data: an N-dimensional array of `f32` values in [0, 1].
pub type ImageData = ArrayD<f32>;

/// Returns true if a shape ends in the extent-3 color-channel axis.
///
/// # Example
///
/// ```
/// use layermix_core::has_color_axis;
///
/// assert!(has_color_axis(&[256, 256, 3]));
/// assert!(!has_color_axis(&[256, 256]));
/// ```
#[inline]
pub fn has_color_axis(shape: &[usize]) -> bool {
    shape.last() == Some(&3)
}
