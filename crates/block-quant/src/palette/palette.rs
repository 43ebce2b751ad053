//! Palette set with canonical ordering and nearest-color matching.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{MeanColor, Rgb};

/// A non-empty set of distinct colors.
///
/// Entries are kept in ascending `(r, g, b)` order regardless of the order
/// they were supplied in. Palette indices, and therefore tie-breaking in
/// [`find_nearest()`](Self::find_nearest), are stable for a given set of
/// colors.
///
/// # Example
///
/// ```
/// use block_quant::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(0), Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from an explicit list of colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::NoColors`] if `colors` is empty
    /// - [`PaletteError::RepeatedColor`] if a color appears twice
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::NoColors);
        }

        let mut seen = BTreeMap::new();
        for (i, &color) in colors.iter().enumerate() {
            if let Some(&first) = seen.get(&color) {
                return Err(PaletteError::RepeatedColor {
                    color,
                    first,
                    repeat: i,
                });
            }
            seen.insert(color, i);
        }

        Ok(Self {
            colors: seen.into_keys().collect(),
        })
    }

    /// Collect the distinct colors of a pixel stream.
    ///
    /// Repeated colors collapse to a single entry, so an image with N pixels
    /// and K distinct colors yields a palette of exactly K entries.
    ///
    /// # Errors
    ///
    /// [`PaletteError::NoColors`] if the stream yields no pixels.
    ///
    /// ```
    /// use block_quant::{Palette, Rgb};
    ///
    /// let pixels = [Rgb::new(9, 9, 9), Rgb::new(1, 1, 1), Rgb::new(9, 9, 9)];
    /// let palette = Palette::from_pixels(pixels).unwrap();
    /// assert_eq!(palette.colors(), &[Rgb::new(1, 1, 1), Rgb::new(9, 9, 9)]);
    /// ```
    pub fn from_pixels<I>(pixels: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = Rgb>,
    {
        let unique: BTreeSet<Rgb> = pixels.into_iter().collect();
        if unique.is_empty() {
            return Err(PaletteError::NoColors);
        }
        Ok(Self {
            colors: unique.into_iter().collect(),
        })
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"F00"`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::BadEntry`] for an unparseable entry, otherwise the
    /// same errors as [`Palette::new`]. Two spellings of one color
    /// (`"#fff"`, `"FFFFFF"`) count as a repeat.
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Rgb::from_str(s).map_err(|source| PaletteError::BadEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in canonical order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Index of an exact color, if present.
    #[inline]
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.colors.binary_search(&color).ok()
    }

    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.index_of(color).is_some()
    }

    /// Find the palette entry closest to `color` by squared Euclidean RGB
    /// distance.
    ///
    /// Returns `(index, squared_distance)`. When several entries are equally
    /// close, the one with the lowest index wins.
    ///
    /// ```
    /// use block_quant::{MeanColor, Palette, Rgb};
    ///
    /// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
    ///
    /// let (idx, _) = palette.find_nearest(MeanColor::new(200.0, 200.0, 200.0));
    /// assert_eq!(palette.color(idx), Rgb::new(255, 255, 255));
    ///
    /// // Exactly halfway: the first entry wins
    /// let (idx, _) = palette.find_nearest(MeanColor::new(127.5, 127.5, 127.5));
    /// assert_eq!(idx, 0);
    /// ```
    pub fn find_nearest(&self, color: MeanColor) -> (usize, f64) {
        if let Some(idx) = exact_color(color).and_then(|c| self.index_of(c)) {
            return (idx, 0.0);
        }

        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}

/// The exact 8-bit color a mean represents, if every channel is integral.
fn exact_color(color: MeanColor) -> Option<Rgb> {
    let channel = |v: f64| {
        if v.fract() == 0.0 && (0.0..=255.0).contains(&v) {
            Some(v as u8)
        } else {
            None
        }
    };
    Some(Rgb::new(
        channel(color.r)?,
        channel(color.g)?,
        channel(color.b)?,
    ))
}
