//! Block grid geometry and per-block averaging.

use super::error::QuantizeError;
use crate::color::{ChannelSums, MeanColor, Rgb};

/// Geometry of the block grid laid over an image.
///
/// ```
/// use block_quant::BlockGrid;
///
/// let grid = BlockGrid::new(5, 5, 2).unwrap();
/// assert_eq!(grid.padding(), (1, 1));
/// assert_eq!((grid.padded_width(), grid.padded_height()), (6, 6));
/// assert_eq!(grid.block_count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    width: usize,
    height: usize,
    block_size: usize,
    cols: usize,
    rows: usize,
}

impl BlockGrid {
    /// Lay a grid over a `width x height` image.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::InvalidBlockSize`] for a zero block size,
    /// [`QuantizeError::EmptyImage`] for a zero dimension.
    pub fn new(width: usize, height: usize, block_size: usize) -> Result<Self, QuantizeError> {
        if block_size == 0 {
            return Err(QuantizeError::InvalidBlockSize { block_size });
        }
        if width == 0 || height == 0 {
            return Err(QuantizeError::EmptyImage { width, height });
        }
        Ok(Self {
            width,
            height,
            block_size,
            cols: width.div_ceil(block_size),
            rows: height.div_ceil(block_size),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Blocks per row.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Blocks per column.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Edge padding `(right, bottom)` needed to reach whole blocks.
    #[inline]
    pub fn padding(&self) -> (usize, usize) {
        (
            self.padded_width() - self.width,
            self.padded_height() - self.height,
        )
    }

    #[inline]
    pub fn padded_width(&self) -> usize {
        self.cols * self.block_size
    }

    #[inline]
    pub fn padded_height(&self) -> usize {
        self.rows * self.block_size
    }

    /// Row-major index of the block containing pixel `(x, y)`.
    #[inline]
    pub fn block_index(&self, x: usize, y: usize) -> usize {
        (y / self.block_size) * self.cols + x / self.block_size
    }

    /// Mean color of every block, row-major.
    ///
    /// Cells beyond the image edge repeat the last column / row, so an edge
    /// block always averages exactly `block_size²` samples. Padding is
    /// never materialised: the last column and row are weighted by the
    /// number of cells they stand for, keeping the cost at `width * height`
    /// whatever the block size.
    ///
    /// `pixels` must hold `width * height` row-major pixels.
    pub fn block_means(&self, pixels: &[Rgb]) -> Vec<MeanColor> {
        debug_assert_eq!(pixels.len(), self.width * self.height);

        let mut sums = vec![ChannelSums::default(); self.block_count()];
        let (pad_w, pad_h) = self.padding();
        let last_x = self.width - 1;
        let last_y = self.height - 1;

        for (y, row) in pixels.chunks_exact(self.width).enumerate() {
            let weight_y = if y == last_y { pad_h as u128 + 1 } else { 1 };
            let block_row = (y / self.block_size) * self.cols;

            for (x, &color) in row.iter().enumerate() {
                let weight_x = if x == last_x { pad_w as u128 + 1 } else { 1 };
                sums[block_row + x / self.block_size].add_weighted(color, weight_x * weight_y);
            }
        }

        sums.iter().map(ChannelSums::mean).collect()
    }
}
