/// Command-line parsing and the top-level processor
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and tile export
pub mod image;
/// Log subscriber setup
pub mod logging;
/// Progress display
pub mod progress;
