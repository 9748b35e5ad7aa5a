//! Error types for image file I/O.

use thiserror::Error;

/// Error type for loading and saving pixel arrays.
#[derive(Debug, Error)]
pub enum IoError {
    /// The codec failed to decode or encode the file.
    #[error("codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The array's layout has no file representation.
    ///
    /// Files hold grayscale (two axes) or RGB (two axes plus the trailing
    /// extent-3 channel axis) data; other layouts cannot be encoded.
    #[error("array of shape {shape:?} has no file representation")]
    UnsupportedLayout {
        /// Shape of the offending array
        shape: Vec<usize>,
    },
}

/// Result type for image file I/O.
pub type IoResult<T> = Result<T, IoError>;
