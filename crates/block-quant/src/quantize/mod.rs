//! Block quantization
//!
//! The image is covered by a grid of `block_size x block_size` blocks. When
//! the dimensions are not multiples of the block size the grid extends past
//! the bottom and right edges, and the overhanging cells read the nearest
//! edge pixel. Each block's mean color is snapped to its nearest palette
//! entry and every pixel of the block takes that entry. The result is
//! cropped to the source dimensions.

mod error;
mod grid;
mod quantizer;

pub use error::QuantizeError;
pub use grid::BlockGrid;
pub use quantizer::{quantize, BlockQuantizer, DEFAULT_BLOCK_SIZE};
