//! Row-major tile grid laid over a source image
//!
//! The grid is never stored as pixel data. It is pure arithmetic over the image
//! dimensions and the nominal tile size, and maps between grid coordinates,
//! row-major tile indices and clipped pixel regions.

use crate::io::error::{Result, invalid_parameter};

/// One grid cell: where a tile comes from in the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// Row-major index, also used for the output filename
    pub index: usize,
    /// Grid row, counted from the top
    pub row: usize,
    /// Grid column, counted from the left
    pub column: usize,
    /// Left edge in source pixels
    pub x: u32,
    /// Top edge in source pixels
    pub y: u32,
    /// Width after clipping to the source bounds
    pub width: u32,
    /// Height after clipping to the source bounds
    pub height: u32,
}

impl TileRegion {
    /// Bounding box as `(left, top, right, bottom)`, right and bottom exclusive
    pub const fn bounds(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Tile grid covering an image of fixed dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    image_width: u32,
    image_height: u32,
    tile_width: u32,
    tile_height: u32,
    columns: usize,
    rows: usize,
}

impl TileGrid {
    /// Create the grid for an image and nominal tile size
    ///
    /// Dimensions that are not an exact multiple of the tile size leave a
    /// final row or column of narrower tiles; nothing is padded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either tile dimension is zero
    pub fn new(
        image_width: u32,
        image_height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self> {
        if tile_width == 0 {
            return Err(invalid_parameter(
                "tile_width",
                &tile_width,
                &"tile width must be positive",
            ));
        }
        if tile_height == 0 {
            return Err(invalid_parameter(
                "tile_height",
                &tile_height,
                &"tile height must be positive",
            ));
        }

        Ok(Self {
            image_width,
            image_height,
            tile_width,
            tile_height,
            columns: image_width.div_ceil(tile_width) as usize,
            rows: image_height.div_ceil(tile_height) as usize,
        })
    }

    /// Number of tiles in each row
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of tile rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of tiles covering the image
    pub const fn tile_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Nominal tile size as `(width, height)`
    pub const fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Source image size as `(width, height)`
    pub const fn image_size(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }

    /// Row-major index of a grid cell, `None` outside the grid
    pub const fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// Region for a row-major index, `None` past the last tile
    pub const fn region(&self, index: usize) -> Option<TileRegion> {
        if index >= self.tile_count() {
            return None;
        }
        let row = index / self.columns;
        let column = index % self.columns;
        Some(self.cell(row, column))
    }

    /// All regions in row-major order: left to right, then top to bottom
    pub fn regions(&self) -> impl Iterator<Item = TileRegion> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |column| self.cell(row, column)))
    }

    // Callers guarantee row < rows and column < columns
    const fn cell(&self, row: usize, column: usize) -> TileRegion {
        let x = column as u32 * self.tile_width;
        let y = row as u32 * self.tile_height;
        let right = min_u32(x.saturating_add(self.tile_width), self.image_width);
        let bottom = min_u32(y.saturating_add(self.tile_height), self.image_height);

        TileRegion {
            index: row * self.columns + column,
            row,
            column,
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    /// Whether a region is smaller than the nominal tile size
    pub const fn is_clipped(&self, region: &TileRegion) -> bool {
        region.width < self.tile_width || region.height < self.tile_height
    }
}

const fn min_u32(a: u32, b: u32) -> u32 {
    if a < b { a } else { b }
}
