//! Pearlerizer - bead-sprite patterns from photos
//!
//! File handling, configuration and PNG output around the `block_quant`
//! core. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
