//! Command-line interface for splitting a sprite sheet into tiles

use crate::algorithm::splitter::{SplitReport, TileSplitter};
use crate::io::configuration::{
    DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_PATH, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, SplitConfig,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "tilesplit")]
#[command(
    author,
    version,
    about = "Split an image into fixed-size PNG tiles in row-major order"
)]
/// Command-line arguments for the tile splitter
pub struct Cli {
    /// Source image to split
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// Directory receiving tile_<n>.png files, created if missing
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Tile width in pixels
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_TILE_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tile_width: u32,

    /// Tile height in pixels
    #[arg(
        short = 'H',
        long,
        default_value_t = DEFAULT_TILE_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tile_height: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every tile as it is written
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the split configuration from the parsed arguments
    pub fn split_config(&self) -> SplitConfig {
        SplitConfig {
            source_path: self.source.clone(),
            output_dir: self.output_dir.clone(),
            tile_width: self.tile_width,
            tile_height: self.tile_height,
        }
    }
}

/// Runs one split from CLI arguments and reports the tile count
pub struct TileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl TileProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Split the source image and print `Total tiles created: N`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the source cannot be
    /// loaded, or the output directory or any tile cannot be written
    // The tile count line is the tool's only stdout output
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<SplitReport> {
        let result = TileSplitter::new(self.cli.split_config())
            .and_then(|splitter| splitter.split_with_progress(&self.progress_manager));
        self.progress_manager.finish();

        match result {
            Ok(report) => {
                println!("{}", summary_line(&report));
                Ok(report)
            }
            Err(err) => {
                error!(kind = err.kind(), "{err}");
                Err(err)
            }
        }
    }

    /// Run [`TileProcessor::process`] and map the outcome to a process exit code
    ///
    /// Errors are already logged by `process`, so nothing else is printed here.
    pub fn run(&self) -> ExitCode {
        match self.process() {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        }
    }
}

/// The single stdout line reporting how many tiles were written
pub fn summary_line(report: &SplitReport) -> String {
    format!("Total tiles created: {}", report.tiles_written)
}
