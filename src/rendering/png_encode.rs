use crate::error::RenderError;
use block_quant::QuantizedImage;
use std::io::Cursor;

/// Encodes quantized images as PNG.
///
/// The PNG color type is chosen from the number of palette colors the image
/// actually uses:
/// - up to 256 colors → indexed color type 3 with a PLTE chunk holding only
///   the used colors, at the smallest bit depth (1, 2, 4 or 8) that fits
/// - more than 256 colors → 8-bit RGB
///
/// The encoded bytes are then recompressed losslessly with oxipng.
pub fn encode_png(image: &QuantizedImage) -> Result<Vec<u8>, RenderError> {
    let (width, height) = png_dimensions(image)?;
    let used = image.used_colors();

    let (color_type, bit_depth, plte, data) = if used.len() <= 256 {
        // Map palette indices to positions in the compact PLTE
        let mut remap = vec![0u8; image.palette().len()];
        for (slot, &idx) in used.iter().enumerate() {
            remap[idx as usize] = slot as u8;
        }
        let compact: Vec<u8> = image
            .indices()
            .iter()
            .map(|&idx| remap[idx as usize])
            .collect();

        let (depth, bits) = match used.len() {
            0..=2 => (png::BitDepth::One, 1),
            3..=4 => (png::BitDepth::Two, 2),
            5..=16 => (png::BitDepth::Four, 4),
            _ => (png::BitDepth::Eight, 8),
        };
        let plte: Vec<u8> = used
            .iter()
            .flat_map(|&idx| image.palette().color(idx as usize).to_bytes())
            .collect();
        let packed = if bits == 8 {
            compact
        } else {
            pack_nbits(&compact, width, bits)
        };
        (png::ColorType::Indexed, depth, Some(plte), packed)
    } else {
        (
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            image.to_rgb(),
        )
    };

    // Fast settings; oxipng picks filters and compression afterwards
    let png_bytes = write_png(width, height, color_type, bit_depth, plte.as_deref(), &data)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::debug!(%e, "PNG optimisation failed, keeping plain encoding");
        png_bytes
    });
    Ok(optimized)
}

fn png_dimensions(image: &QuantizedImage) -> Result<(u32, u32), RenderError> {
    let unsupported = || RenderError::UnsupportedDimensions {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| unsupported())?;
    let height = u32::try_from(image.height()).map_err(|_| unsupported())?;
    if width == 0 || height == 0 {
        return Err(unsupported());
    }
    Ok((width, height))
}

fn write_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
