//! Source image loading and PNG tile export

use crate::io::configuration::{TILE_FILE_EXTENSION, TILE_FILE_PREFIX};
use crate::io::error::{Result, SplitError};
use crate::spatial::TileRegion;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// Decode the source image from disk
///
/// The format is guessed from the file contents, so any format the `image`
/// crate was built with is accepted regardless of extension.
///
/// # Errors
///
/// Returns `ImageLoad` if the file does not exist, cannot be read, or is not a
/// decodable image
pub fn load_source_image(path: &Path) -> Result<DynamicImage> {
    image::ImageReader::open(path)
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .with_guessed_format()
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Create the output directory and any missing parents
///
/// Succeeds without changes if the directory already exists.
///
/// # Errors
///
/// Returns `DirectoryCreate` if the directory cannot be created, including
/// when a regular file already occupies the path
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| SplitError::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy one region out of the source into an independent image
///
/// Regions reaching past the source edge are clipped, never padded.
pub fn crop_tile(source: &DynamicImage, region: &TileRegion) -> DynamicImage {
    source.crop_imm(region.x, region.y, region.width, region.height)
}

/// Filename for the tile with the given row-major index
pub fn tile_file_name(index: usize) -> String {
    format!("{TILE_FILE_PREFIX}{index}.{TILE_FILE_EXTENSION}")
}

/// Full output path for the tile with the given row-major index
pub fn tile_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(tile_file_name(index))
}

/// Encode a tile as PNG and write it, replacing any existing file
///
/// # Errors
///
/// Returns `TileWrite` if the tile cannot be encoded or the file cannot be
/// written
pub fn save_tile(tile: &DynamicImage, path: &Path, index: usize) -> Result<()> {
    tile.save_with_format(path, ImageFormat::Png)
        .map_err(|e| SplitError::TileWrite {
            path: path.to_path_buf(),
            index,
            source: e,
        })
}
