//! Color types
//!
//! - [`Rgb`]: an exact 8-bit color, as stored in images and palettes.
//! - [`MeanColor`]: a real-valued channel average, as produced by block
//!   averaging before it is snapped to a palette entry.
//!
//! # Example
//!
//! ```
//! use block_quant::{MeanColor, Rgb};
//!
//! let mean = MeanColor::of(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
//! assert_eq!(mean.r, 127.5);
//! ```

mod mean;
mod rgb;

pub(crate) use mean::ChannelSums;
pub use mean::MeanColor;
pub use rgb::Rgb;
