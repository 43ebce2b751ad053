//! Nearest-neighbour resize of quantized images.
//!
//! Resizing works on palette indices, so the result still contains only
//! palette colors.

use crate::output::QuantizedImage;
use crate::quantize::QuantizeError;

/// Resize with nearest-neighbour sampling.
///
/// Destination pixel `x` samples source column
/// `floor((x + 0.5) * src_width / dst_width)`, and likewise for rows.
///
/// # Errors
///
/// [`QuantizeError::InvalidTargetSize`] if either target dimension is 0.
///
/// ```
/// use block_quant::{resize_nearest, Palette, QuantizedImage, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = QuantizedImage::new(vec![0, 1], 2, 1, palette).unwrap();
///
/// let wide = resize_nearest(&image, 4, 2).unwrap();
/// assert_eq!(wide.indices(), &[0, 0, 1, 1, 0, 0, 1, 1]);
/// ```
pub fn resize_nearest(
    image: &QuantizedImage,
    new_width: usize,
    new_height: usize,
) -> Result<QuantizedImage, QuantizeError> {
    if new_width == 0 || new_height == 0 {
        return Err(QuantizeError::InvalidTargetSize {
            width: new_width,
            height: new_height,
        });
    }

    let (src_width, src_height) = (image.width(), image.height());
    if src_width == new_width && src_height == new_height {
        return Ok(image.clone());
    }

    let src_x: Vec<usize> = (0..new_width)
        .map(|x| sample(x, src_width, new_width))
        .collect();
    let src = image.indices();

    let mut indices = Vec::with_capacity(new_width * new_height);
    for y in 0..new_height {
        let row = sample(y, src_height, new_height) * src_width;
        indices.extend(src_x.iter().map(|&sx| src[row + sx]));
    }

    Ok(QuantizedImage::from_valid(
        indices,
        new_width,
        new_height,
        image.palette().clone(),
    ))
}

/// Source coordinate whose cell contains the centre of destination cell `dst`.
#[inline]
fn sample(dst: usize, src_len: usize, dst_len: usize) -> usize {
    // (dst + 0.5) * src_len / dst_len, in integers
    let pos = ((2 * dst + 1) as u128 * src_len as u128) / (2 * dst_len as u128);
    (pos as usize).min(src_len - 1)
}
