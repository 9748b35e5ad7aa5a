//! Shape and channel reconciliation.
//!
//! Blend formulas need their two operands to agree in shape by the time the
//! math runs. Two stages get them there:
//!
//! - [`match_size`] pads the smaller array (centered, zero-filled) so both
//!   share the larger extent on every axis. Padding, not resizing: no
//!   interpolation or scaling happens.
//! - [`colorize`] reconciles channel counts. When exactly one operand
//!   carries the trailing extent-3 color axis, the other is assumed to be
//!   grayscale and gets its value replicated across three channels.
//!
//! Size matching runs first and channel promotion second, so [`match_size`]
//! reconciles the leading common axes when the axis counts differ by the one
//! promotable axis, leaving the channel axis for [`colorize`]. Every other
//! axis-count difference is an error at either stage.

use layermix_core::{has_color_axis, Error, ImageData, Result};
use ndarray::{Axis, IxDyn, Slice};
use tracing::debug;

/// Whether the axis-count difference is the one channel promotion resolves:
/// exactly one axis apart, with the longer array ending in extent 3.
fn promotable(a: &ImageData, b: &ImageData) -> bool {
    let (na, nb) = (a.ndim(), b.ndim());
    let (longer, diff) = if na >= nb { (a, na - nb) } else { (b, nb - na) };
    diff == 1 && has_color_axis(longer.shape())
}

/// Replicates a grayscale array across a new trailing extent-3 axis.
fn promote(gray: &ImageData) -> ImageData {
    let mut shape = gray.shape().to_vec();
    shape.push(3);
    let mut out = ImageData::zeros(IxDyn(&shape));
    let channel_axis = Axis(shape.len() - 1);
    for (mut lane, &v) in out.lanes_mut(channel_axis).into_iter().zip(gray.iter()) {
        lane.fill(v);
    }
    out
}

/// Centers `src` inside a zero-filled array whose leading axes take the
/// target extents. Axes already at or beyond the target are left alone;
/// trailing axes beyond `target.len()` keep their extent.
fn pad_centered(src: &ImageData, target: &[usize]) -> ImageData {
    let lead = target.len();
    if src.shape()[..lead] == *target {
        return src.clone();
    }

    let mut full = target.to_vec();
    full.extend_from_slice(&src.shape()[lead..]);
    let offsets: Vec<usize> = src
        .shape()
        .iter()
        .zip(&full)
        .map(|(&s, &t)| (t - s) / 2)
        .collect();

    debug!(src = ?src.shape(), dst = ?full, "padding to match size");

    let mut out = ImageData::zeros(IxDyn(&full));
    out.slice_each_axis_mut(|ax| {
        let i = ax.axis.index();
        let start = offsets[i] as isize;
        Slice::new(start, Some(start + src.shape()[i] as isize), 1)
    })
    .assign(src);
    out
}

/// Pads the smaller of two arrays so both share one size.
///
/// The larger extent wins per axis, independently; the smaller array is
/// centered inside a zero-filled array of the target shape, offset
/// `floor((target - original) / 2)` per axis. Two equal-shape arrays come
/// back unchanged.
///
/// # Errors
///
/// Fails when the axis counts differ, unless the difference is the single
/// promotable channel axis (which [`colorize`] resolves next); then only
/// the leading common axes are reconciled here.
pub fn match_size(a: &ImageData, b: &ImageData) -> Result<(ImageData, ImageData)> {
    if a.ndim() != b.ndim() && !promotable(a, b) {
        return Err(Error::axis_count_mismatch(a.shape(), b.shape()));
    }

    let common = a.ndim().min(b.ndim());
    let target: Vec<usize> = (0..common)
        .map(|i| a.shape()[i].max(b.shape()[i]))
        .collect();

    Ok((pad_centered(a, &target), pad_centered(b, &target)))
}

/// Reconciles channel counts by promoting the grayscale operand.
///
/// Applies only when the axis counts differ by exactly one and the array
/// with more axes ends in an extent-3 color axis: the other array is
/// re-expressed with an added trailing axis of extent 3, each slice a copy
/// of the original value. Operands that already agree in axis count pass
/// through unchanged.
///
/// # Errors
///
/// Fails for any other axis-count difference.
pub fn colorize(a: ImageData, b: ImageData) -> Result<(ImageData, ImageData)> {
    if a.ndim() == b.ndim() {
        return Ok((a, b));
    }
    if !promotable(&a, &b) {
        return Err(Error::axis_count_mismatch(a.shape(), b.shape()));
    }
    if a.ndim() < b.ndim() {
        let a = promote(&a);
        Ok((a, b))
    } else {
        let b = promote(&b);
        Ok((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn ramp_5x5() -> ImageData {
        ImageData::from_shape_fn(IxDyn(&[5, 5]), |d| d[1] as f32 * 0.25)
    }

    #[test]
    fn test_equal_shapes_are_untouched() {
        let a = ramp_5x5();
        let b = ImageData::zeros(IxDyn(&[5, 5]));
        let (a2, b2) = match_size(&a, &b).unwrap();
        assert_eq!(a2, a);
        assert_eq!(b2, b);
    }

    #[test]
    fn test_smaller_array_is_centered() {
        let a = arr2(&[[0.5, 1.0], [1.0, 0.5]]).into_dyn();
        let b = ImageData::zeros(IxDyn(&[4, 4]));
        let (a2, b2) = match_size(&a, &b).unwrap();

        // offset floor((4 - 2) / 2) = 1 on both axes
        let expected = arr2(&[
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.5, 1.0, 0.0],
            [0.0, 1.0, 0.5, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ])
        .into_dyn();
        assert_eq!(a2, expected);
        assert_eq!(b2.shape(), &[4, 4]);
    }

    #[test]
    fn test_odd_gap_rounds_down() {
        // 5 wide into 7 wide lands at offset 1, as does 5 tall into 8 tall
        let a = ImageData::from_elem(IxDyn(&[5, 5]), 1.0);
        let b = ImageData::zeros(IxDyn(&[8, 7]));
        let (a2, _) = match_size(&a, &b).unwrap();

        assert_eq!(a2.shape(), &[8, 7]);
        assert_eq!(a2[[0, 1]], 0.0);
        assert_eq!(a2[[1, 1]], 1.0);
        assert_eq!(a2[[5, 5]], 1.0);
        assert_eq!(a2[[6, 1]], 0.0);
        assert_eq!(a2[[1, 0]], 0.0);
        assert_eq!(a2[[1, 6]], 0.0);
    }

    #[test]
    fn test_axes_win_independently() {
        let a = ImageData::from_elem(IxDyn(&[3, 7]), 1.0);
        let b = ImageData::from_elem(IxDyn(&[5, 3]), 1.0);
        let (a2, b2) = match_size(&a, &b).unwrap();
        assert_eq!(a2.shape(), &[5, 7]);
        assert_eq!(b2.shape(), &[5, 7]);
    }

    #[test]
    fn test_axis_count_mismatch_is_an_error() {
        let a = ImageData::zeros(IxDyn(&[5, 5]));
        let b = ImageData::zeros(IxDyn(&[2, 5, 5, 3]));
        assert!(matches!(
            match_size(&a, &b),
            Err(Error::AxisCountMismatch { .. })
        ));
    }

    #[test]
    fn test_promotable_pair_matches_leading_axes() {
        let a = ImageData::from_elem(IxDyn(&[3, 3]), 1.0);
        let b = ImageData::zeros(IxDyn(&[5, 5, 3]));
        let (a2, b2) = match_size(&a, &b).unwrap();
        assert_eq!(a2.shape(), &[5, 5]);
        assert_eq!(b2.shape(), &[5, 5, 3]);
        // centered on the common axes
        assert_eq!(a2[[0, 0]], 0.0);
        assert_eq!(a2[[1, 1]], 1.0);
    }

    #[test]
    fn test_colorize_promotes_base() {
        let a = arr2(&[[1.0, 0.5], [0.0, 0.5]]).into_dyn();
        let b = ImageData::zeros(IxDyn(&[2, 2, 3]));
        let (a2, b2) = colorize(a, b).unwrap();

        assert_eq!(a2.shape(), &[2, 2, 3]);
        for c in 0..3 {
            assert_eq!(a2[[0, 0, c]], 1.0);
            assert_eq!(a2[[0, 1, c]], 0.5);
            assert_eq!(a2[[1, 0, c]], 0.0);
        }
        assert_eq!(b2.shape(), &[2, 2, 3]);
    }

    #[test]
    fn test_colorize_promotes_blend() {
        let a = ImageData::zeros(IxDyn(&[2, 2, 3]));
        let b = arr2(&[[0.25, 0.75], [0.75, 0.25]]).into_dyn();
        let (a2, b2) = colorize(a, b).unwrap();

        assert_eq!(a2.shape(), &[2, 2, 3]);
        assert_eq!(b2.shape(), &[2, 2, 3]);
        for c in 0..3 {
            assert_eq!(b2[[0, 0, c]], 0.25);
            assert_eq!(b2[[1, 0, c]], 0.75);
        }
    }

    #[test]
    fn test_colorize_passes_matching_ranks_through() {
        let a = ImageData::zeros(IxDyn(&[4, 4]));
        let b = ImageData::from_elem(IxDyn(&[4, 4]), 1.0);
        let (a2, b2) = colorize(a.clone(), b.clone()).unwrap();
        assert_eq!(a2, a);
        assert_eq!(b2, b);
    }

    #[test]
    fn test_colorize_rejects_unpromotable() {
        // one axis apart but no trailing color axis on the longer side
        let a = ImageData::zeros(IxDyn(&[5, 5]));
        let b = ImageData::zeros(IxDyn(&[2, 5, 5]));
        assert!(matches!(
            colorize(a, b),
            Err(Error::AxisCountMismatch { .. })
        ));
    }
}
