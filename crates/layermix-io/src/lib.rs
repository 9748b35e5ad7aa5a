//! # layermix-io
//!
//! File codecs for layermix.
//!
//! The blending core works on bare `f32` arrays and never touches files;
//! this crate is the boundary that does. [`load`] decodes an image file
//! into a normalized array and [`save`] encodes one back, with the format
//! chosen from the file extension.
//!
//! Grayscale files become two-axis `(height, width)` arrays; everything
//! else becomes `(height, width, 3)` RGB. Sample values are normalized
//! from 8-bit to [0, 1] on load and quantized back on save.
//!
//! # Example
//!
//! ```rust,no_run
//! use layermix_io::{load, save};
//!
//! let base = load("base.png")?;
//! let top = load("top.png")?;
//! // ... blend ...
//! save("out.png", &base)?;
//! # Ok::<(), layermix_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

use std::path::Path;

use image::{GrayImage, RgbImage};
use layermix_core::{clamp01, ImageData};
use ndarray::IxDyn;

pub use error::{IoError, IoResult};

/// Decodes an image file into a normalized pixel array.
///
/// Grayscale sources load as `(height, width)`; color sources load as
/// `(height, width, 3)`. Values land in [0, 1].
///
/// # Errors
///
/// Fails when the file cannot be read or decoded.
pub fn load(path: impl AsRef<Path>) -> IoResult<ImageData> {
    let img = image::open(path.as_ref())?;

    if img.color().has_color() {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        let mut out = ImageData::zeros(IxDyn(&[h as usize, w as usize, 3]));
        for (x, y, px) in rgb.enumerate_pixels() {
            for c in 0..3 {
                out[[y as usize, x as usize, c]] = f32::from(px[c]) / 255.0;
            }
        }
        Ok(out)
    } else {
        let gray = img.to_luma8();
        let (w, h) = gray.dimensions();
        let mut out = ImageData::zeros(IxDyn(&[h as usize, w as usize]));
        for (x, y, px) in gray.enumerate_pixels() {
            out[[y as usize, x as usize]] = f32::from(px[0]) / 255.0;
        }
        Ok(out)
    }
}

/// Encodes a pixel array into an image file.
///
/// Two-axis arrays save as grayscale, `(height, width, 3)` arrays as RGB.
/// Values are clamped to [0, 1] and quantized to 8 bits; the format comes
/// from the file extension.
///
/// # Errors
///
/// Fails when the array has another layout, or when encoding or writing
/// the file fails.
pub fn save(path: impl AsRef<Path>, data: &ImageData) -> IoResult<()> {
    let shape = data.shape();
    match shape {
        [h, w] => {
            let img = GrayImage::from_fn(*w as u32, *h as u32, |x, y| {
                image::Luma([quantize(data[[y as usize, x as usize]])])
            });
            img.save(path.as_ref())?;
            Ok(())
        }
        [h, w, 3] => {
            let img = RgbImage::from_fn(*w as u32, *h as u32, |x, y| {
                image::Rgb([
                    quantize(data[[y as usize, x as usize, 0]]),
                    quantize(data[[y as usize, x as usize, 1]]),
                    quantize(data[[y as usize, x as usize, 2]]),
                ])
            });
            img.save(path.as_ref())?;
            Ok(())
        }
        _ => Err(IoError::UnsupportedLayout {
            shape: shape.to_vec(),
        }),
    }
}

/// 8-bit quantization of a normalized sample.
#[inline]
fn quantize(v: f32) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}
