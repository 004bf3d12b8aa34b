//! Loading and saving mazes as plain text

use std::path::Path;

use crate::io::error::{ClassicsError, Result};
use crate::maze::MazeGrid;

/// Read a maze from a text file
///
/// The format is the one accepted by `MazeGrid::from_str`: one line per row,
/// digit codes or symbols, whitespace optional.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a rectangular maze
pub fn load_maze(path: &Path) -> Result<MazeGrid> {
    let text = std::fs::read_to_string(path).map_err(|e| ClassicsError::FileSystem {
        path: path.to_path_buf(),
        operation: "read maze",
        source: e,
    })?;
    text.parse()
}

/// Write a maze as space-separated digit codes
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn save_maze(grid: &MazeGrid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ClassicsError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, grid.to_string()).map_err(|e| ClassicsError::FileSystem {
        path: path.to_path_buf(),
        operation: "write maze",
        source: e,
    })
}
