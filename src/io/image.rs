//! PNG export of maze grids, one coloured square per cell

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::{CELL_PIXELS, cell_color};
use crate::io::error::{ClassicsError, Result, invalid_parameter};
use crate::maze::MazeGrid;

/// Render the grid into an RGBA image, `cell_pixels` pixels per cell side
///
/// # Errors
///
/// Returns `InvalidParameter` if the grid or the scale is empty, or the
/// resulting image would not fit in `u32` dimensions
pub fn render_grid(grid: &MazeGrid, cell_pixels: u32) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let width = image_side(grid.cols(), cell_pixels, "cols")?;
    let height = image_side(grid.rows(), cell_pixels, "rows")?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let position = [(y / cell_pixels) as usize, (x / cell_pixels) as usize];
        let color = grid.get(position).map_or([0, 0, 0, 0], cell_color);
        Rgba(color)
    });

    Ok(img)
}

fn image_side(cells: usize, cell_pixels: u32, parameter: &'static str) -> Result<u32> {
    if cells == 0 || cell_pixels == 0 {
        return Err(invalid_parameter(
            parameter,
            &cells,
            &"grid and cell size must be non-empty",
        ));
    }
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(cell_pixels))
        .ok_or_else(|| invalid_parameter(parameter, &cells, &"image would be too large"))
}

/// Export the grid as a PNG using the default cell scale
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(grid: &MazeGrid, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, CELL_PIXELS)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ClassicsError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| ClassicsError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
