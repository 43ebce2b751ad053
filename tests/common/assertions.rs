//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert `path` is a PNG of the expected size and return its RGB pixels
pub fn assert_png(path: &Path, width: u32, height: u32) -> image::RgbImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgb8();
    assert_eq!(
        img.dimensions(),
        (width, height),
        "Unexpected dimensions for {}",
        path.display()
    );
    img
}

/// Assert every pixel of `img` is one of `palette`
pub fn assert_palette_only(img: &image::RgbImage, palette: &[[u8; 3]]) {
    let allowed: BTreeSet<[u8; 3]> = palette.iter().copied().collect();
    for (x, y, px) in img.enumerate_pixels() {
        assert!(
            allowed.contains(&px.0),
            "Pixel ({x}, {y}) = {:?} is not a palette color",
            px.0
        );
    }
}

/// Distinct colors present in `img`
pub fn distinct_colors(img: &image::RgbImage) -> BTreeSet<[u8; 3]> {
    img.pixels().map(|p| p.0).collect()
}
