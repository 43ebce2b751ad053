//! Error type for quantization and resizing

use std::fmt;

/// Error type for invalid quantizer arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// Block size must be at least 1
    InvalidBlockSize {
        /// The rejected block size
        block_size: usize,
    },
    /// Image has zero width or height
    EmptyImage {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
    /// Pixel buffer length does not match `width * height`
    DimensionMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
    /// Palette index with no matching palette entry
    IndexOutOfRange {
        /// The offending index
        index: u32,
        /// Number of palette entries
        palette_len: usize,
    },
    /// Resize target has zero width or height
    InvalidTargetSize {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::InvalidBlockSize { block_size } => {
                write!(f, "block size must be at least 1, got {}", block_size)
            }
            QuantizeError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            QuantizeError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} pixels, expected {}",
                    actual, expected
                )
            }
            QuantizeError::IndexOutOfRange { index, palette_len } => {
                write!(
                    f,
                    "palette index {} out of range for {} colors",
                    index, palette_len
                )
            }
            QuantizeError::InvalidTargetSize { width, height } => {
                write!(f, "invalid resize target {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for QuantizeError {}
