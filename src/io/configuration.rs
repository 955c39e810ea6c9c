//! Splitting constants and runtime configuration defaults

use crate::io::error::Result;
use crate::spatial::TileGrid;
use std::path::PathBuf;

/// Default tile width in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 16;
/// Default tile height in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 16;

/// Source image read when no path is given
pub const DEFAULT_SOURCE_PATH: &str = "Overworld.png";
/// Directory tiles are written into when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "tiles";

// Output naming: <prefix><index>.<extension>
/// Prefix of every tile filename
pub const TILE_FILE_PREFIX: &str = "tile_";
/// Extension of every tile filename, always encoded as PNG
pub const TILE_FILE_EXTENSION: &str = "png";

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Runtime options for a single split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Image to split
    pub source_path: PathBuf,
    /// Directory receiving the tiles, created if absent
    pub output_dir: PathBuf,
    /// Nominal tile width in pixels
    pub tile_width: u32,
    /// Nominal tile height in pixels
    pub tile_height: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
        }
    }
}

impl SplitConfig {
    /// Check that the tile dimensions can form a grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either tile dimension is zero
    pub fn validate(&self) -> Result<()> {
        TileGrid::new(0, 0, self.tile_width, self.tile_height).map(|_| ())
    }
}
