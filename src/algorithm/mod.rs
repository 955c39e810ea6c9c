//! Tile splitting pass

/// Sequential crop-and-write over every grid cell
pub mod splitter;

pub use splitter::{SplitReport, TileSplitter};
