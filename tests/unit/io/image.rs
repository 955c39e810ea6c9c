//! Tests for source loading, output directory creation, cropping and tile export

#[cfg(test)]
mod tests {
    use crate::{coordinate_pixel, write_test_image};
    use image::GenericImageView;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tilesplit::SplitError;
    use tilesplit::io::image::{
        crop_tile, ensure_output_dir, load_source_image, save_tile, tile_file_name, tile_path,
    };
    use tilesplit::spatial::TileGrid;

    // Tests decoding reports the source dimensions
    // Verified by swapping width and height in the test image
    #[test]
    fn test_load_source_image_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_image(temp_dir.path(), "sheet.png", 20, 12);

        let source = load_source_image(&path).unwrap();
        assert_eq!(source.dimensions(), (20, 12));
    }

    // Tests a missing file is a load error carrying the path
    // Verified by mapping open failures to a different variant
    #[test]
    fn test_load_missing_file_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.png");

        match load_source_image(&path) {
            Err(SplitError::ImageLoad { path: err_path, .. }) => assert_eq!(err_path, path),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests a file that is not an image is a load error
    // Verified by skipping the decode step
    #[test]
    fn test_load_undecodable_file_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.png");
        fs::write(&path, "not a png").unwrap();

        let err = load_source_image(&path).unwrap_err();
        assert_eq!(err.kind(), "LoadError");
    }

    // Tests format detection ignores a misleading extension
    // Verified by removing with_guessed_format
    #[test]
    fn test_load_guesses_format_from_contents() {
        let temp_dir = TempDir::new().unwrap();
        let png = write_test_image(temp_dir.path(), "sheet.png", 8, 8);
        let renamed = temp_dir.path().join("sheet.dat");
        fs::rename(&png, &renamed).unwrap();

        assert!(load_source_image(&renamed).is_ok());
    }

    // Tests directory creation is idempotent and creates parents
    // Verified by using create_dir instead of create_dir_all
    #[test]
    fn test_ensure_output_dir_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("assets").join("tiles");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    // Tests a file in the way of the output directory is a directory error
    // Verified by ignoring create_dir_all failures
    #[test]
    fn test_ensure_output_dir_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("tiles");
        fs::write(&blocker, "occupied").unwrap();

        let err = ensure_output_dir(&blocker).unwrap_err();
        assert!(matches!(err, SplitError::DirectoryCreate { .. }));
    }

    // Tests crops copy the right pixels and clip at the edge
    // Verified by offsetting the crop origin by one pixel
    #[test]
    fn test_crop_tile_contents_and_clipping() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_image(temp_dir.path(), "sheet.png", 20, 16);
        let source = load_source_image(&path).unwrap();
        let grid = TileGrid::new(20, 16, 16, 16).unwrap();

        let edge = grid.region(1).unwrap();
        let tile = crop_tile(&source, &edge);
        assert_eq!(tile.dimensions(), (4, 16));
        assert_eq!(tile.get_pixel(0, 0), coordinate_pixel(16, 0));
        assert_eq!(tile.get_pixel(3, 15), coordinate_pixel(19, 15));
    }

    // Tests filenames follow tile_<index>.png
    // Verified by changing the filename prefix
    #[test]
    fn test_tile_file_naming() {
        assert_eq!(tile_file_name(0), "tile_0.png");
        assert_eq!(tile_file_name(42), "tile_42.png");
        assert_eq!(
            tile_path(Path::new("tiles"), 7),
            PathBuf::from("tiles").join("tile_7.png")
        );
    }

    // Tests saved tiles are PNG and overwrite existing files
    // Verified by saving with the format inferred from a non-PNG extension
    #[test]
    fn test_save_tile_writes_png_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_image(temp_dir.path(), "sheet.png", 16, 16);
        let source = load_source_image(&path).unwrap();

        let out = tile_path(temp_dir.path(), 0);
        fs::write(&out, "stale").unwrap();
        save_tile(&source, &out, 0).unwrap();

        let bytes = fs::read(&out).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        assert_eq!(image::open(&out).unwrap().dimensions(), (16, 16));
    }

    // Tests a write into a missing directory is a write error with the tile index
    // Verified by dropping the index from the error
    #[test]
    fn test_save_tile_failure_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_image(temp_dir.path(), "sheet.png", 16, 16);
        let source = load_source_image(&path).unwrap();

        let out = temp_dir.path().join("absent").join("tile_3.png");
        match save_tile(&source, &out, 3) {
            Err(SplitError::TileWrite { index, .. }) => assert_eq!(index, 3),
            other => unreachable!("Expected TileWrite error, got {other:?}"),
        }
    }
}
