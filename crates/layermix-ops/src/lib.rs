//! # layermix-ops
//!
//! Blend-mode compositing over numeric pixel arrays.
//!
//! Two arrays go in: a base (the bottom layer) and a blend (the top layer),
//! both `f32` with values in [0, 1] by convention. One of the catalog's
//! blend modes combines them elementwise, wrapped by a fixed pipeline of
//! cross-cutting modifiers: size reconciliation, grayscale-to-RGB channel
//! promotion, partial-effect fading, per-pixel masking, and output-range
//! clipping.
//!
//! # Modules
//!
//! - [`modes`] - The closed catalog of blend formulas
//! - [`pipeline`] - The composed per-mode operations and their options
//! - [`reconcile`] - Size and channel-count reconciliation
//! - [`mix`] - Fade and mask mixing
//! - [`clip`] - Output-range clipping
//! - [`parallel`] - Rayon variants of the composed operation
//!
//! # Example
//!
//! ```rust
//! use ndarray::{ArrayD, IxDyn};
//! use layermix_ops::{screen, BlendOptions};
//!
//! let base = ArrayD::from_elem(IxDyn(&[4, 4]), 0.5);
//! let top = ArrayD::from_elem(IxDyn(&[4, 4]), 0.5);
//!
//! let out = screen(&base, &top, &BlendOptions::default()).unwrap();
//! assert!((out[[0, 0]] - 0.75).abs() < 1e-6);
//! ```
//!
//! Modes accept mismatched operands where it makes sense: a smaller array
//! is padded (centered, zero-filled) to the larger size, and a grayscale
//! array meeting an RGB one is replicated across three channels. Anything
//! else is a shape error, raised before any pixel math runs.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clip;
pub mod mix;
pub mod modes;
pub mod pipeline;
pub mod reconcile;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use layermix_core::{Error, ImageData, Result};
pub use modes::{BlendMode, ParseModeError};
pub use pipeline::{
    blend, color_burn, color_dodge, darker, difference, exclusion, hard_light, hard_mix, lighter,
    linear_burn, linear_dodge, linear_light, multiply, overlay, pin_light, replace, screen,
    soft_light, vivid_light, BlendOptions,
};
