//! # layermix-core
//!
//! Core types for layermix image blending.
//!
//! This crate provides the foundational pieces used throughout the layermix
//! workspace:
//!
//! - [`ImageData`] - The dynamic-dimensional `f32` pixel array
//! - [`Error`], [`Result`] - The shared error type for shape reconciliation
//! - [`lerp`], [`clamp01`] - Scalar math helpers
//!
//! ## Crate Structure
//!
//! This crate is the foundation of layermix and has no internal dependencies.
//! All other layermix crates depend on it:
//!
//! ```text
//! layermix-core (this crate)
//!    ^
//!    |
//!    +-- layermix-ops (blend catalog, modifier pipeline)
//!    +-- layermix-io (file codecs)
//!    +-- layermix-cli (command line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod array;
pub mod error;
pub mod math;

// Re-exports for convenience
pub use array::{has_color_axis, ImageData};
pub use error::{Error, Result};
pub use math::{clamp01, lerp};
