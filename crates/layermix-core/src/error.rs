//! Error types for layermix operations.
//!
//! Blending fails in exactly two ways, both of them shape errors raised
//! before any pixel math runs:
//!
//! - the two operand arrays' axis counts differ in a way channel promotion
//!   cannot reconcile ([`Error::AxisCountMismatch`]);
//! - a supplied mask does not match the shape of the image it masks
//!   ([`Error::MaskShapeMismatch`]).
//!
//! Numeric-domain failures do not exist: every formula with a potential
//! division by zero carries an explicit guard branch, so no operation ever
//! fails on a float domain violation. Errors propagate uncaught to the
//! caller; there is no retry and no partial computation on malformed input.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling array shapes for blending.
#[derive(Debug, Error)]
pub enum Error {
    /// The operands' axis counts cannot be reconciled.
    ///
    /// Channel promotion only resolves a difference of exactly one axis
    /// where the larger array ends in an extent-3 channel axis. Every other
    /// axis-count difference is unresolvable.
    #[error("cannot reconcile shapes {a:?} and {b:?}: axis counts differ and channel promotion does not apply")]
    AxisCountMismatch {
        /// Shape of the base array
        a: Vec<usize>,
        /// Shape of the blend array
        b: Vec<usize>,
    },

    /// A mask's shape does not match the image it is applied to.
    ///
    /// Masks are never normalized or reshaped; the caller must supply a
    /// mask matching the reconciled image shape.
    #[error("mask shape {mask:?} does not match image shape {image:?}")]
    MaskShapeMismatch {
        /// Shape of the supplied mask
        mask: Vec<usize>,
        /// Shape of the image being masked
        image: Vec<usize>,
    },
}

impl Error {
    /// Creates an [`Error::AxisCountMismatch`] from the two operand shapes.
    #[inline]
    pub fn axis_count_mismatch(a: &[usize], b: &[usize]) -> Self {
        Self::AxisCountMismatch {
            a: a.to_vec(),
            b: b.to_vec(),
        }
    }

    /// Creates an [`Error::MaskShapeMismatch`] from the mask and image shapes.
    #[inline]
    pub fn mask_shape_mismatch(mask: &[usize], image: &[usize]) -> Self {
        Self::MaskShapeMismatch {
            mask: mask.to_vec(),
            image: image.to_vec(),
        }
    }
}
