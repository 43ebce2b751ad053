//! Block size and output size policy.
//!
//! A caller may ask for "about `target_width` blocks across" instead of a
//! raw block size. Floor division means the realised block count can
//! overshoot the target; the final resize brings the output to exactly
//! `target_width`.

/// Block size to use for an image `width` pixels wide.
///
/// With a positive `target_width` this is `max(1, width / target_width)`;
/// otherwise `default_block_size`. Never returns 0.
///
/// ```
/// use block_quant::size::effective_block_size;
///
/// assert_eq!(effective_block_size(1000, Some(128), 16), 7);
/// assert_eq!(effective_block_size(100, Some(128), 16), 1);
/// assert_eq!(effective_block_size(1000, None, 16), 16);
/// ```
pub fn effective_block_size(
    width: usize,
    target_width: Option<usize>,
    default_block_size: usize,
) -> usize {
    match target_width {
        Some(target) if target > 0 => (width / target).max(1),
        _ => default_block_size.max(1),
    }
}

/// Dimensions of the final resize, if one is requested.
///
/// The width becomes `target_width` and the height keeps the aspect ratio,
/// rounded down but at least 1.
///
/// ```
/// use block_quant::size::final_dimensions;
///
/// assert_eq!(final_dimensions(1000, 750, Some(128)), Some((128, 96)));
/// assert_eq!(final_dimensions(1000, 750, None), None);
/// ```
pub fn final_dimensions(
    width: usize,
    height: usize,
    target_width: Option<usize>,
) -> Option<(usize, usize)> {
    match target_width {
        Some(target) if target > 0 && width > 0 => {
            let scaled = (height as u128 * target as u128 / width as u128) as usize;
            Some((target, scaled.max(1)))
        }
        _ => None,
    }
}
