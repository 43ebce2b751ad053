//! block-quant: palette-quantized block pixelation
//!
//! This library turns an image into a grid of uniform blocks whose colors
//! are drawn from a fixed palette, the look of bead sprites and pixel art.
//!
//! # Quick Start
//!
//! ```
//! use block_quant::{quantize, Palette, Rgb};
//!
//! let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
//!
//! let pixels = vec![Rgb::new(40, 40, 40); 6 * 4];
//! let result = quantize(&pixels, 6, 4, &palette, 2).unwrap();
//!
//! assert_eq!(result.width(), 6);
//! assert_eq!(result.height(), 4);
//! assert!(result.to_pixels().iter().all(|&p| p == Rgb::new(0, 0, 0)));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! pixels (row-major Rgb, width x height)
//!     |
//!     v
//! BlockGrid               ceil(h/B) x ceil(w/B) blocks; cells past the
//!     |                   right/bottom edge repeat the edge pixel
//!     v
//! block means             per-channel f64 average of B*B samples
//!     |
//!     v
//! Palette::find_nearest   squared Euclidean RGB distance,
//!     |                   ties -> lowest palette index
//!     v
//! QuantizedImage          one palette index per pixel, cropped to w x h
//!     |
//!     v
//! resize_nearest          optional, keeps palette indices
//! ```
//!
//! # Palette Order
//!
//! A [`Palette`] always stores its colors in ascending `(r, g, b)` order.
//! Two palettes built from the same colors are identical no matter how the
//! colors were supplied, so a block mean that is exactly halfway between
//! two entries always resolves to the same one.
//!
//! # Size Policy
//!
//! [`size::effective_block_size`] derives a block size from a desired
//! number of blocks across, and [`size::final_dimensions`] gives the size
//! of the closing [`resize_nearest`] step.

pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod resize;
pub mod size;


pub use color::{MeanColor, Rgb};
pub use output::QuantizedImage;
pub use palette::{Palette, PaletteError, ParseColorError};
pub use quantize::{quantize, BlockGrid, BlockQuantizer, QuantizeError, DEFAULT_BLOCK_SIZE};
pub use resize::resize_nearest;
