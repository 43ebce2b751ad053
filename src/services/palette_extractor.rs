//! Palette loading from reference images or explicit color lists.

use block_quant::Palette;
use std::path::Path;

use crate::error::PearlError;
use crate::models::AppConfig;
use crate::services::image_loader::{load_rgb_image, rgb_pixels};

/// Collect the distinct colors of a palette image.
///
/// Every pixel contributes; repeated colors collapse to one entry.
pub fn extract_palette(path: &Path) -> Result<Palette, PearlError> {
    let image = load_rgb_image(path)?;
    let palette = Palette::from_pixels(rgb_pixels(&image))?;
    tracing::info!(
        path = %path.display(),
        pixels = image.width() as u64 * image.height() as u64,
        colors = palette.len(),
        "Extracted palette"
    );
    Ok(palette)
}

/// Palette for a run: explicit `colors` if configured, else the palette image.
pub fn load_palette(config: &AppConfig) -> Result<Palette, PearlError> {
    match &config.colors {
        Some(colors) => {
            let refs: Vec<&str> = colors.iter().map(String::as_str).collect();
            let palette = Palette::from_hex(&refs)?;
            tracing::info!(colors = palette.len(), "Using configured color list");
            Ok(palette)
        }
        None => extract_palette(&config.palette),
    }
}

/// Palette as text: one `#rrggbb` per line, or a pretty JSON array.
pub fn format_palette(palette: &Palette, json: bool) -> serde_json::Result<String> {
    let hex: Vec<String> = palette.colors().iter().map(|c| c.to_string()).collect();
    if json {
        serde_json::to_string_pretty(&hex)
    } else {
        Ok(hex.join("\n"))
    }
}
