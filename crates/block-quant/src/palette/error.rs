//! Why a palette could not be built.

use std::fmt;

use crate::color::Rgb;

/// A color string that is not `#rgb` / `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of digits after the optional `#`.
    DigitCount { digits: usize },
    /// Something other than `0-9a-fA-F` after the optional `#`.
    NotHex { text: String },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::DigitCount { digits } => {
                write!(f, "expected 3 or 6 hex digits, found {}", digits)
            }
            ParseColorError::NotHex { text } => {
                write!(f, "'{}' is not a hex color", text)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Palette construction failure.
///
/// Palettes come from two places, the pixels of a reference image and a
/// user-supplied list of hex strings. Each variant names which input was at
/// fault so the message can be shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Empty color list, or a reference image without pixels.
    NoColors,
    /// The same color listed twice, possibly under different spellings
    /// (`#fff` and `#FFFFFF`). Positions are 0-based input indices.
    RepeatedColor {
        color: Rgb,
        first: usize,
        repeat: usize,
    },
    /// A list entry that does not parse as a color.
    BadEntry {
        index: usize,
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::NoColors => write!(f, "no colors to build a palette from"),
            PaletteError::RepeatedColor {
                color,
                first,
                repeat,
            } => write!(
                f,
                "color {} is listed twice (entries {} and {})",
                color, first, repeat
            ),
            PaletteError::BadEntry { index, source } => {
                write!(f, "color entry {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::BadEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}
