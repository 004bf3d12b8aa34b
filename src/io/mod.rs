/// Command-line interface and report writer
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of maze grids
pub mod image;
/// Maze text files
pub mod maze_file;
/// Elimination progress display
pub mod progress;
