//! Spatial data structures for tile extraction

/// Row-major tile grid and clipped tile regions
pub mod grid;

pub use grid::{TileGrid, TileRegion};
