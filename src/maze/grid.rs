//! Maze grid storage, text parsing and rendering
//!
//! The grid wraps an `ndarray::Array2<Cell>` addressed by `[row, col]`. Text
//! input accepts either digit codes (`0` open, `1` wall, `2` visited,
//! `3` dead end) or symbols (`.`, `#`, `*`, `x`); whitespace between cells is
//! optional, so both `1 0 1` and `#.#` describe the same row.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;

use crate::io::error::{ClassicsError, Result, invalid_parameter, maze_parse_error};
use crate::maze::{Cell, Position};

/// Two-dimensional maze owned by a single search at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Array2<Cell>,
}

impl MazeGrid {
    /// Create a grid where every cell is open
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Open),
        }
    }

    /// Create a grid with a wall border and an open interior
    pub fn bordered(rows: usize, cols: usize) -> Self {
        let mut cells = Array2::from_elem((rows, cols), Cell::Open);
        for ((row, col), cell) in cells.indexed_iter_mut() {
            if row == 0 || col == 0 || row + 1 == rows || col + 1 == cols {
                *cell = Cell::Wall;
            }
        }
        Self { cells }
    }

    /// Wrap an existing cell array
    pub const fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Build a grid from rows of numeric cell codes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No rows are given or the first row is empty
    /// - Rows have different lengths
    /// - A code is not in `0..=3`
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(invalid_parameter("maze", &"[]", &"maze must not be empty"));
        }

        let mut flat = Vec::with_capacity(rows.len() * width);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(maze_parse_error(
                    r + 1,
                    row.len().min(width) + 1,
                    &format!("expected {width} cells, found {}", row.len()),
                ));
            }
            for (c, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or_else(|| {
                    maze_parse_error(r + 1, c + 1, &format!("unknown cell code {code}"))
                })?;
                flat.push(cell);
            }
        }

        Self::from_flat(rows.len(), width, flat)
    }

    fn from_flat(rows: usize, cols: usize, flat: Vec<Cell>) -> Result<Self> {
        let cells = Array2::from_shape_vec((rows, cols), flat).map_err(|e| {
            invalid_parameter("maze", &format!("{rows}x{cols}"), &e.to_string())
        })?;
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Whether `position` lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position[0] < self.rows() && position[1] < self.cols()
    }

    /// Cell at `position`, `None` outside the grid
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Overwrite a cell, returning its previous state
    ///
    /// Returns `None` and leaves the grid untouched when `position` is outside.
    pub fn set(&mut self, position: Position, cell: Cell) -> Option<Cell> {
        self.cells
            .get_mut(position)
            .map(|slot| std::mem::replace(slot, cell))
    }

    /// Number of cells in the given state
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Positions of all cells in the given state, row-major
    pub fn positions_of(&self, state: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(move |&(_, &cell)| cell == state)
            .map(|((row, col), _)| [row, col])
    }

    /// Whether every border cell is a wall
    ///
    /// The classic exercise relies on this border instead of bounds checks.
    pub fn has_wall_border(&self) -> bool {
        let (rows, cols) = (self.rows(), self.cols());
        self.cells.indexed_iter().all(|((row, col), &cell)| {
            let on_border = row == 0 || col == 0 || row + 1 == rows || col + 1 == cols;
            !on_border || cell == Cell::Wall
        })
    }

    /// Turn visited and dead-end cells back into open cells
    pub fn reset_search(&mut self) {
        self.cells.mapv_inplace(|cell| {
            if cell.is_explored() {
                Cell::Open
            } else {
                cell
            }
        });
    }

    /// Render one symbol per cell, one line per row
    pub fn render_symbols(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for row in self.cells.rows() {
            out.extend(row.iter().map(|cell| cell.symbol()));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for MazeGrid {
    /// Space-separated numeric codes, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, " {}", cell.code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for MazeGrid {
    type Err = ClassicsError;

    fn from_str(s: &str) -> Result<Self> {
        let mut flat = Vec::new();
        let mut width = None;
        let mut rows = 0;

        for (line_index, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut row_len = 0;
            for (column_index, c) in line.chars().enumerate() {
                if c.is_whitespace() {
                    continue;
                }
                let cell = Cell::from_char(c).ok_or_else(|| {
                    maze_parse_error(
                        line_index + 1,
                        column_index + 1,
                        &format!("unexpected character '{c}'"),
                    )
                })?;
                flat.push(cell);
                row_len += 1;
            }

            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(maze_parse_error(
                        line_index + 1,
                        1,
                        &format!("expected {expected} cells, found {row_len}"),
                    ));
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.ok_or_else(|| maze_parse_error(1, 1, &"maze text is empty"))?;
        Self::from_flat(rows, cols, flat)
    }
}
