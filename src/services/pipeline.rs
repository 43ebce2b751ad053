//! Per-image processing: size policy, quantization, final resize, PNG output.

use block_quant::size::{effective_block_size, final_dimensions};
use block_quant::{resize_nearest, BlockQuantizer, Palette, QuantizedImage};
use image::RgbImage;
use std::path::Path;

use crate::error::PearlError;
use crate::models::AppConfig;
use crate::rendering::encode_png;
use crate::services::image_loader::{load_rgb_image, rgb_pixels, write_atomic};
use crate::services::palette_extractor::load_palette;

/// Converts images into palette-quantized block art.
///
/// Holds the palette so it is loaded once per run and shared across
/// every image.
#[derive(Debug, Clone)]
pub struct Pearlerizer {
    palette: Palette,
    block_size: usize,
    target_width: Option<usize>,
}

impl Pearlerizer {
    pub fn new(
        palette: Palette,
        block_size: u32,
        target_width: Option<u32>,
    ) -> Result<Self, PearlError> {
        if block_size == 0 {
            return Err(PearlError::InvalidArgument(
                "block_size must be a positive integer".to_string(),
            ));
        }
        if target_width == Some(0) {
            return Err(PearlError::InvalidArgument(
                "target_width must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            palette,
            block_size: block_size as usize,
            target_width: target_width.map(|w| w as usize),
        })
    }

    /// Validate `config` and load its palette.
    pub fn from_config(config: &AppConfig) -> Result<Self, PearlError> {
        config.validate()?;
        let palette = load_palette(config)?;
        Self::new(palette, config.block_size, config.target_width)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Block size used for an image of the given width.
    pub fn block_size_for(&self, width: usize) -> usize {
        effective_block_size(width, self.target_width, self.block_size)
    }

    pub fn process(&self, image: &RgbImage) -> Result<QuantizedImage, PearlError> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let block_size = self.block_size_for(width);
        let quantizer = BlockQuantizer::new(block_size)?;
        let quantized = quantizer.quantize(&rgb_pixels(image), width, height, &self.palette)?;

        match final_dimensions(width, height, self.target_width) {
            Some((w, h)) => {
                tracing::debug!(width = w, height = h, "Resizing to target width");
                Ok(resize_nearest(&quantized, w, h)?)
            }
            None => Ok(quantized),
        }
    }

    /// Decode `input`, process it and write the result to `output` as PNG.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<QuantizedImage, PearlError> {
        let image = load_rgb_image(input)?;
        let quantized = self.process(&image)?;
        let png = encode_png(&quantized)?;
        write_atomic(output, &png)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            block_size = self.block_size_for(image.width() as usize),
            width = quantized.width(),
            height = quantized.height(),
            bytes = png.len(),
            "Wrote pattern"
        );
        Ok(quantized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_quant::Rgb;

    fn bw() -> Palette {
        Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_values() {
        assert!(matches!(
            Pearlerizer::new(bw(), 0, None),
            Err(PearlError::InvalidArgument(_))
        ));
        assert!(matches!(
            Pearlerizer::new(bw(), 4, Some(0)),
            Err(PearlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_block_size_for_target_width() {
        let p = Pearlerizer::new(bw(), 16, Some(10)).unwrap();
        assert_eq!(p.block_size_for(100), 10);
        assert_eq!(p.block_size_for(5), 1);

        let p = Pearlerizer::new(bw(), 16, None).unwrap();
        assert_eq!(p.block_size_for(100), 16);
    }

    #[test]
    fn test_process_keeps_dimensions_without_target() {
        let p = Pearlerizer::new(bw(), 4, None).unwrap();
        let image = RgbImage::from_pixel(10, 7, image::Rgb([200, 200, 200]));

        let out = p.process(&image).unwrap();
        assert_eq!((out.width(), out.height()), (10, 7));
        assert!(out.to_pixels().iter().all(|&c| c == Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_process_resizes_to_target_width() {
        let p = Pearlerizer::new(bw(), 16, Some(20)).unwrap();
        let image = RgbImage::from_fn(100, 50, |x, _| {
            if x < 50 {
                image::Rgb([10, 10, 10])
            } else {
                image::Rgb([240, 240, 240])
            }
        });

        let out = p.process(&image).unwrap();
        assert_eq!((out.width(), out.height()), (20, 10));
        assert_eq!(out.pixel(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(out.pixel(19, 9), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_process_file_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bmp");
        let output = dir.path().join("out.png");
        RgbImage::from_pixel(8, 8, image::Rgb([30, 30, 30]))
            .save(&input)
            .unwrap();

        let p = Pearlerizer::new(bw(), 4, None).unwrap();
        p.process_file(&input, &output).unwrap();

        let written = image::open(&output).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (8, 8));
        assert!(written.pixels().all(|px| px.0 == [0, 0, 0]));
    }

    #[test]
    fn test_process_file_undecodable_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        std::fs::write(&input, b"garbage").unwrap();

        let p = Pearlerizer::new(bw(), 4, None).unwrap();
        assert!(p.process_file(&input, &output).is_err());
        assert!(!output.exists());
    }
}
