//! Palette types and utilities
//!
//! This module provides the [`Palette`] set and its error types.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
