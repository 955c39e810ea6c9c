//! Sequential crop-and-write pass over the tile grid

use crate::io::configuration::SplitConfig;
use crate::io::error::Result;
use crate::io::image::{crop_tile, ensure_output_dir, load_source_image, save_tile, tile_path};
use crate::io::progress::ProgressManager;
use crate::spatial::TileGrid;
use tracing::debug;

/// Summary of a completed split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitReport {
    /// Source image width in pixels
    pub image_width: u32,
    /// Source image height in pixels
    pub image_height: u32,
    /// Tiles per row
    pub columns: usize,
    /// Tile rows
    pub rows: usize,
    /// Tiles written, equal to `columns * rows`
    pub tiles_written: usize,
    /// Edge tiles smaller than the nominal size
    pub clipped_tiles: usize,
}

/// Splits one source image into fixed-size tiles on disk
#[derive(Debug, Clone)]
pub struct TileSplitter {
    config: SplitConfig,
}

impl TileSplitter {
    /// Create a splitter, rejecting unusable tile sizes up front
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either tile dimension is zero
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this splitter runs with
    pub const fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Run the split without a progress display
    ///
    /// # Errors
    ///
    /// See [`TileSplitter::split_with_progress`]
    pub fn split(&self) -> Result<SplitReport> {
        self.split_with_progress(&ProgressManager::hidden())
    }

    /// Run the split, advancing `progress` once per written tile
    ///
    /// Tiles are written in row-major order as `tile_{index}.png`. Existing
    /// files with the same names are overwritten. A failure stops the pass
    /// immediately and leaves already written tiles in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source image cannot be loaded (nothing is written)
    /// - The output directory cannot be created (nothing is written)
    /// - A tile cannot be written
    pub fn split_with_progress(&self, progress: &ProgressManager) -> Result<SplitReport> {
        let source = load_source_image(&self.config.source_path)?;
        let grid = TileGrid::new(
            source.width(),
            source.height(),
            self.config.tile_width,
            self.config.tile_height,
        )?;

        debug!(
            source = %self.config.source_path.display(),
            width = source.width(),
            height = source.height(),
            columns = grid.columns(),
            rows = grid.rows(),
            "Loaded source image"
        );

        ensure_output_dir(&self.config.output_dir)?;
        progress.start(&self.config.source_path, grid.tile_count());

        let mut clipped_tiles = 0;
        for region in grid.regions() {
            let tile = crop_tile(&source, &region);
            let path = tile_path(&self.config.output_dir, region.index);
            save_tile(&tile, &path, region.index)?;

            if grid.is_clipped(&region) {
                clipped_tiles += 1;
            }
            debug!(
                index = region.index,
                row = region.row,
                column = region.column,
                width = region.width,
                height = region.height,
                path = %path.display(),
                "Wrote tile"
            );
            progress.tile_written();
        }

        let report = SplitReport {
            image_width: source.width(),
            image_height: source.height(),
            columns: grid.columns(),
            rows: grid.rows(),
            tiles_written: grid.tile_count(),
            clipped_tiles,
        };

        debug!(
            tiles = report.tiles_written,
            clipped = report.clipped_tiles,
            output = %self.config.output_dir.display(),
            "Split complete"
        );

        Ok(report)
    }
}
