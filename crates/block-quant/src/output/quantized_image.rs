//! QuantizedImage: palette indices plus dimension metadata.

use crate::color::Rgb;
use crate::palette::Palette;
use crate::quantize::QuantizeError;

/// The output of block quantization.
///
/// # Example
///
/// ```
/// use block_quant::{Palette, QuantizedImage, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = QuantizedImage::new(vec![0, 1, 1, 0], 2, 2, palette).unwrap();
///
/// assert_eq!(image.pixel(1, 0), Rgb::new(255, 255, 255));
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u32>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl QuantizedImage {
    /// Wrap palette indices.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::DimensionMismatch`] if `indices.len() != width * height`
    /// - [`QuantizeError::IndexOutOfRange`] if an index is not below
    ///   `palette.len()`
    pub fn new(
        indices: Vec<u32>,
        width: usize,
        height: usize,
        palette: Palette,
    ) -> Result<Self, QuantizeError> {
        let expected = width * height;
        if indices.len() != expected {
            return Err(QuantizeError::DimensionMismatch {
                expected,
                actual: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= palette.len()) {
            return Err(QuantizeError::IndexOutOfRange {
                index,
                palette_len: palette.len(),
            });
        }
        Ok(Self::from_valid(indices, width, height, palette))
    }

    /// Constructor for indices produced inside this crate, which are in
    /// range by construction.
    pub(crate) fn from_valid(
        indices: Vec<u32>,
        width: usize,
        height: usize,
        palette: Palette,
    ) -> Self {
        debug_assert_eq!(indices.len(), width * height);
        debug_assert!(indices.iter().all(|&i| (i as usize) < palette.len()));
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
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
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.palette.color(self.indices[y * self.width + x] as usize)
    }

    /// Colors of all pixels, row-major.
    pub fn to_pixels(&self) -> Vec<Rgb> {
        self.indices
            .iter()
            .map(|&idx| self.palette.color(idx as usize))
            .collect()
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Palette indices that occur in the image, ascending.
    pub fn used_colors(&self) -> Vec<u32> {
        let mut seen = vec![false; self.palette.len()];
        for &idx in &self.indices {
            seen[idx as usize] = true;
        }
        seen.iter()
            .enumerate()
            .filter(|(_, used)| **used)
            .map(|(i, _)| i as u32)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_palette() -> Palette {
        Palette::new(&[
            Rgb::new(0, 0, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(255, 255, 255),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_stores_fields() {
        let image = QuantizedImage::new(vec![0, 1, 2, 0, 1, 2], 3, 2, rgb_palette()).unwrap();
        assert_eq!(image.indices(), &[0, 1, 2, 0, 1, 2]);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.palette().len(), 3);
    }

    #[test]
    fn test_rgb_output_layout() {
        let image = QuantizedImage::new(vec![0, 2], 2, 1, rgb_palette()).unwrap();
        assert_eq!(image.to_rgb(), vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_pixel_lookup() {
        let image = QuantizedImage::new(vec![0, 1, 2, 2], 2, 2, rgb_palette()).unwrap();
        assert_eq!(image.pixel(1, 0), Rgb::new(255, 0, 0));
        assert_eq!(image.pixel(0, 1), Rgb::new(255, 255, 255));
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_pixel_out_of_bounds() {
        let image = QuantizedImage::new(vec![0], 1, 1, rgb_palette()).unwrap();
        let _ = image.pixel(1, 0);
    }

    #[test]
    fn test_new_rejects_index_past_palette() {
        let result = QuantizedImage::new(vec![0, 3], 2, 1, rgb_palette());
        assert_eq!(
            result,
            Err(QuantizeError::IndexOutOfRange {
                index: 3,
                palette_len: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let result = QuantizedImage::new(vec![0, 1, 2], 2, 2, rgb_palette());
        assert_eq!(
            result,
            Err(QuantizeError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_used_colors() {
        let image = QuantizedImage::new(vec![2, 0, 2, 2], 2, 2, rgb_palette()).unwrap();
        assert_eq!(image.used_colors(), vec![0, 2]);
    }
}
