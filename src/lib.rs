//! Splits a raster image into a row-major grid of fixed-size PNG tiles
//!
//! Intended for preparing sprite sheets and tile sets. Edge tiles are clipped to
//! the image bounds, and each tile's filename index is derived from its grid
//! position, so output names are stable across runs.

#![forbid(unsafe_code)]

/// The crop-and-write pass over a source image
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile grid arithmetic
pub mod spatial;

pub use io::error::{Result, SplitError};
