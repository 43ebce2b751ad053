//! Palette-snapping block quantizer.

use super::error::QuantizeError;
use super::grid::BlockGrid;
use crate::color::Rgb;
use crate::output::QuantizedImage;
use crate::palette::Palette;

/// Block size used when nothing else is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// Reusable quantizer holding a validated block size.
///
/// [`quantize()`](Self::quantize) takes `&self`, so one quantizer serves
/// any number of images and palettes.
///
/// # Example
///
/// ```
/// use block_quant::{BlockQuantizer, Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(90, 90, 90), Rgb::new(120, 120, 120)]).unwrap();
/// let quantizer = BlockQuantizer::new(4).unwrap();
///
/// let pixels = vec![Rgb::new(100, 100, 100); 16];
/// let result = quantizer.quantize(&pixels, 4, 4, &palette).unwrap();
///
/// assert!(result.to_pixels().iter().all(|&p| p == Rgb::new(90, 90, 90)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuantizer {
    block_size: usize,
}

impl BlockQuantizer {
    /// # Errors
    ///
    /// [`QuantizeError::InvalidBlockSize`] if `block_size` is 0.
    pub fn new(block_size: usize) -> Result<Self, QuantizeError> {
        if block_size == 0 {
            return Err(QuantizeError::InvalidBlockSize { block_size });
        }
        Ok(Self { block_size })
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Quantize row-major `pixels` of a `width x height` image against
    /// `palette`.
    ///
    /// The output has the input's dimensions and every pixel is an exact
    /// palette entry.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::EmptyImage`] for a zero dimension,
    /// [`QuantizeError::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn quantize(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<QuantizedImage, QuantizeError> {
        let grid = BlockGrid::new(width, height, self.block_size)?;
        let expected = width * height;
        if pixels.len() != expected {
            return Err(QuantizeError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let block_colors: Vec<u32> = grid
            .block_means(pixels)
            .into_iter()
            .map(|mean| palette.find_nearest(mean).0 as u32)
            .collect();

        // Expanding only the unpadded area is the same as expanding the
        // padded grid and cropping afterwards.
        let mut indices = Vec::with_capacity(expected);
        for y in 0..height {
            let block_row = (y / self.block_size) * grid.cols();
            for x in 0..width {
                indices.push(block_colors[block_row + x / self.block_size]);
            }
        }

        Ok(QuantizedImage::from_valid(
            indices,
            width,
            height,
            palette.clone(),
        ))
    }
}

impl Default for BlockQuantizer {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// Quantize an image in one call.
///
/// Shorthand for `BlockQuantizer::new(block_size)?.quantize(..)`.
pub fn quantize(
    pixels: &[Rgb],
    width: usize,
    height: usize,
    palette: &Palette,
    block_size: usize,
) -> Result<QuantizedImage, QuantizeError> {
    BlockQuantizer::new(block_size)?.quantize(pixels, width, height, palette)
}
