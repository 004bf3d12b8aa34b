//! Exercise constants and runtime configuration defaults

use crate::maze::Cell;

// Sample maze from the classic exercise, walled on every side
/// Built-in maze as cell codes (0 = open, 1 = wall)
pub const SAMPLE_MAZE: [[u8; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

/// Default start position for the built-in maze
pub const DEFAULT_START: [usize; 2] = [1, 1];
/// Default target position for the built-in maze
pub const DEFAULT_TARGET: [usize; 2] = [6, 6];
/// Default direction order, as accepted by `DirectionOrder::from_str`
pub const DEFAULT_DIRECTION_ORDER: &str = "down,right,up,left";

/// Sample sorted values for the search command
pub const SAMPLE_VALUES: [i64; 7] = [1, 8, 10, 89, 100, 100, 123];
/// Sample value to look up
pub const SAMPLE_TARGET: i64 = 100;

/// Default ring size for the Josephus command
pub const DEFAULT_RING_SIZE: usize = 5;
/// Default one-based start offset
pub const DEFAULT_START_OFFSET: usize = 1;
/// Default count step
pub const DEFAULT_STEP: usize = 3;

/// Largest ring whose members and elimination order are printed in full
pub const DISPLAY_LIMIT: usize = 64;

// Smaller rings finish before a bar would render
/// Ring size from which elimination progress is displayed
pub const PROGRESS_THRESHOLD: usize = 100_000;
/// Eliminations between progress bar refreshes
pub const PROGRESS_REFRESH_INTERVAL: u64 = 4096;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// PNG export settings
/// Side length in pixels of one rendered maze cell
pub const CELL_PIXELS: u32 = 16;

/// Fill colour for each cell state
pub const fn cell_color(cell: Cell) -> [u8; 4] {
    match cell {
        Cell::Open => [255, 255, 255, 255],
        Cell::Wall => [32, 32, 32, 255],
        Cell::Visited => [46, 160, 67, 255],
        Cell::DeadEnd => [207, 34, 46, 255],
    }
}
