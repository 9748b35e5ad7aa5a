//! Fade and mask mixing.
//!
//! Both stages blend a computed result back toward a reference array. Fade
//! uses one scalar weight for the whole image; a mask generalizes it to a
//! per-pixel weight array. In both, weight 0 keeps the reference untouched
//! and weight 1 keeps the full result.

use layermix_core::{lerp, Error, ImageData, Result};
use ndarray::Zip;

/// Linearly interpolates between a reference array and a computed result by
/// a scalar weight: `a + (ab - a) * amount`.
///
/// An amount of 1.0 means full effect; callers skip the call entirely in
/// that case. No bounds are enforced here; the clipping stage handles any
/// overshoot carried in from the result.
///
/// # Example
///
/// ```rust
/// use ndarray::{ArrayD, IxDyn};
/// use layermix_ops::mix::fade;
///
/// let base = ArrayD::from_elem(IxDyn(&[2, 2]), 0.0);
/// let result = ArrayD::from_elem(IxDyn(&[2, 2]), 1.0);
/// let mixed = fade(&base, &result, 0.5);
/// assert!(mixed.iter().all(|&v| v == 0.5));
/// ```
pub fn fade(reference: &ImageData, result: &ImageData, amount: f32) -> ImageData {
    Zip::from(reference)
        .and(result)
        .map_collect(|&a, &ab| lerp(a, ab, amount))
}

/// Linearly interpolates between a reference array and a computed result
/// using a per-pixel weight array: `a * (1 - m) + ab * m`.
///
/// No normalization or reshaping of the mask is performed.
///
/// # Errors
///
/// Fails when the mask's shape differs from the image shape.
pub fn mask(reference: &ImageData, result: &ImageData, weights: &ImageData) -> Result<ImageData> {
    if weights.shape() != result.shape() {
        return Err(Error::mask_shape_mismatch(weights.shape(), result.shape()));
    }
    Ok(Zip::from(reference)
        .and(result)
        .and(weights)
        .map_collect(|&a, &ab, &m| lerp(a, ab, m)))
}
