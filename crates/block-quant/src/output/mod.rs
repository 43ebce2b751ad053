//! Output types for the quantization pipeline.
//!
//! [`QuantizedImage`] stores one palette index per pixel together with the
//! owned [`Palette`](crate::palette::Palette). RGB output is produced on
//! demand by looking the indices up, so every output color is an exact
//! palette entry.

mod quantized_image;

pub use quantized_image::QuantizedImage;
