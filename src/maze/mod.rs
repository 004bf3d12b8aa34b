//! Backtracking maze search
//!
//! This module contains:
//! - Cell states and the grid that holds them
//! - Directions and configurable direction orders
//! - The depth-first, first-success path search

/// Cell state enum
pub mod cell;
/// Directions and direction orders
pub mod direction;
/// Grid storage, parsing and rendering
pub mod grid;
/// Path search and strategy comparison
pub mod solver;

pub use cell::Cell;
pub use direction::{Direction, DirectionOrder};
pub use grid::MazeGrid;
pub use solver::{SearchOutcome, StrategyReport, find_path, solve};

/// Grid coordinates as `[row, col]`
pub type Position = [usize; 2];
