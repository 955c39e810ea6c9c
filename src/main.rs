//! CLI entry point for the tile splitter

use clap::Parser;
use std::process::ExitCode;
use tilesplit::io::cli::{Cli, TileProcessor};
use tilesplit::io::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    TileProcessor::new(cli).run()
}
