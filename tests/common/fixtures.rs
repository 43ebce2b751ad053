//! Test fixtures and constants.

use image::{Rgb, RgbImage};
use std::path::Path;

/// Palette colors used by [`write_palette`]
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];

    pub const ALL: [[u8; 3]; 5] = [BLACK, WHITE, RED, GREEN, BLUE];
}

/// Write a palette image holding every color in `colors`, each repeated in a
/// 2x2 swatch so extraction has duplicates to collapse.
pub fn write_palette(path: &Path, colors: &[[u8; 3]]) {
    let width = colors.len() as u32 * 2;
    let img = RgbImage::from_fn(width, 2, |x, _| Rgb(colors[(x / 2) as usize]));
    img.save(path).unwrap();
}

/// Uniform image of a single color
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Left half `left`, right half `right`
pub fn split(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    })
}

/// Smooth RGB gradient, useful for exercising many distinct block means
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 127 / (width + height).max(1)) as u8,
        ])
    })
}

/// Save `image` to `path`; the format follows the extension.
pub fn save(image: &RgbImage, path: &Path) {
    image.save(path).unwrap();
}
