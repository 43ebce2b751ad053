//! Real-valued channel averages.

use super::rgb::Rgb;

/// The per-channel arithmetic mean of a set of pixels.
///
/// Values stay unrounded; only the palette match that follows produces an
/// integer color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeanColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl MeanColor {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Mean of the given pixels. An empty slice yields black.
    pub fn of(pixels: &[Rgb]) -> Self {
        let mut acc = ChannelSums::default();
        for &p in pixels {
            acc.add(p);
        }
        acc.mean()
    }

    /// Squared Euclidean distance to an exact color over R, G and B.
    #[inline]
    pub fn distance_squared(self, color: Rgb) -> f64 {
        let dr = self.r - color.r as f64;
        let dg = self.g - color.g as f64;
        let db = self.b - color.b as f64;
        dr * dr + dg * dg + db * db
    }
}

impl From<Rgb> for MeanColor {
    fn from(color: Rgb) -> Self {
        Self::new(color.r as f64, color.g as f64, color.b as f64)
    }
}

/// Integer channel accumulator. Sums stay exact; the division happens once.
///
/// `u128` so that a single edge pixel standing in for a huge padded area
/// cannot overflow.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ChannelSums {
    r: u128,
    g: u128,
    b: u128,
    count: u128,
}

impl ChannelSums {
    #[inline]
    pub(crate) fn add(&mut self, p: Rgb) {
        self.add_weighted(p, 1);
    }

    /// Count `p` as if it occurred `n` times.
    #[inline]
    pub(crate) fn add_weighted(&mut self, p: Rgb, n: u128) {
        self.r += p.r as u128 * n;
        self.g += p.g as u128 * n;
        self.b += p.b as u128 * n;
        self.count += n;
    }

    pub(crate) fn mean(&self) -> MeanColor {
        if self.count == 0 {
            return MeanColor::default();
        }
        let n = self.count as f64;
        MeanColor::new(self.r as f64 / n, self.g as f64 / n, self.b as f64 / n)
    }
}
