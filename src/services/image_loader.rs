//! Image file I/O
//!
//! Decoding goes through the `image` crate. Whatever the source encoding
//! (grayscale, RGBA, palette), images are converted to 8-bit RGB; alpha is
//! dropped, not composited.

use block_quant::Rgb;
use image::{ImageReader, RgbImage};
use std::fs;
use std::path::Path;

use crate::error::PearlError;

/// Decode an image file into 8-bit RGB.
///
/// The format is detected from the file contents, so a mislabelled
/// extension still decodes.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, PearlError> {
    let reader = ImageReader::open(path)
        .map_err(|e| PearlError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| PearlError::io(path, e))?;
    let image = reader
        .decode()
        .map_err(|e| PearlError::from_image(path, e))?;
    tracing::trace!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image.to_rgb8())
}

/// Row-major pixels of an RGB image.
pub fn rgb_pixels(image: &RgbImage) -> Vec<Rgb> {
    image.pixels().map(|p| Rgb::from_bytes(p.0)).collect()
}

/// Write `bytes` to `path` via a sibling temporary file, so a failed write
/// never leaves a truncated output behind.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PearlError> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".part");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, bytes).map_err(|e| PearlError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(PearlError::io(path, e));
    }
    Ok(())
}
