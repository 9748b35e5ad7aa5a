//! Output-range clipping.
//!
//! Modes built on division or unbounded addition/subtraction can leave the
//! normalized [0, 1] range. Clipping replaces every value outside the range
//! with the nearer boundary, restoring the image-data convention. NaN
//! collapses to the lower bound.
//!
//! Clipping is idempotent: clipping an already-clipped array changes
//! nothing.

use layermix_core::ImageData;

/// Clamp one value into [0, 1], treating NaN as the lower bound.
#[inline]
pub(crate) fn clip_value(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Clamps every value of the array into [0, 1] in place.
pub fn clip_in_place(data: &mut ImageData) {
    data.mapv_inplace(clip_value);
}

/// Returns a copy of the array with every value clamped into [0, 1].
///
/// # Example
///
/// ```rust
/// use ndarray::{ArrayD, IxDyn};
/// use layermix_ops::clip::clip;
///
/// let raw = ArrayD::from_elem(IxDyn(&[2, 2]), 1.5);
/// let clipped = clip(&raw);
/// assert!(clipped.iter().all(|&v| v == 1.0));
/// ```
pub fn clip(data: &ImageData) -> ImageData {
    data.mapv(clip_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, IxDyn};

    #[test]
    fn test_clips_both_bounds() {
        let raw = arr2(&[[-0.5, 0.0, 0.5], [1.0, 1.5, 2.0]]).into_dyn();
        let expected = arr2(&[[0.0, 0.0, 0.5], [1.0, 1.0, 1.0]]).into_dyn();
        assert_eq!(clip(&raw), expected);
    }

    #[test]
    fn test_idempotent() {
        let raw = arr2(&[[-0.25, 0.75], [1.25, 0.5]]).into_dyn();
        let once = clip(&raw);
        let twice = clip(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_in_range_untouched() {
        let raw = arr2(&[[0.0, 0.25], [0.75, 1.0]]).into_dyn();
        assert_eq!(clip(&raw), raw);
    }

    #[test]
    fn test_nan_becomes_zero() {
        let mut raw = ImageData::zeros(IxDyn(&[3]));
        raw[[1]] = f32::NAN;
        raw[[2]] = 0.5;
        clip_in_place(&mut raw);
        assert_eq!(raw[[1]], 0.0);
        assert_eq!(raw[[2]], 0.5);
    }
}
