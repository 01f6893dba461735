//! Board — rectangular grid of cell states.
//!
//! DESIGN
//! ======
//! The board is a dense rows x cols grid addressed as `(x, y)` with `x` as
//! the column and `y` as the row. Rectangularity is an invariant, not a
//! convention: constructors and the serde deserializer reject empty or
//! ragged grids, so a non-rectangular board is unrepresentable on either
//! side of the wire.
//!
//! WIRE FORMAT
//! ===========
//! Cells serialize as small integers: black stone `0`, white stone `1`,
//! empty `-1`. Decoding is lenient — any value outside `{0, 1}` reads back
//! as empty — so snapshots from older producers still parse.

use serde::{Deserialize, Serialize};

use crate::game::Player;

/// Largest accepted board edge. Guards untrusted create/deserialize input.
pub const MAX_DIM: usize = 32;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols} (each edge must be 1..={MAX_DIM})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("ragged board: row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: usize, y: usize },
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i8", into = "i8")]
pub enum Cell {
    Empty,
    Stone(Player),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<i8> for Cell {
    fn from(value: i8) -> Self {
        match value {
            0 => Cell::Stone(Player::Black),
            1 => Cell::Stone(Player::White),
            _ => Cell::Empty,
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Stone(Player::Black) => 0,
            Cell::Stone(Player::White) => 1,
            Cell::Empty => -1,
        }
    }
}

/// Rectangular grid of cells. Row-major: `rows[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl Board {
    /// Create an empty rows x cols board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either edge is zero or
    /// exceeds [`MAX_DIM`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || rows > MAX_DIM || cols > MAX_DIM {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows: vec![vec![Cell::Empty; cols]; rows] })
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if row_count == 0 || cols == 0 || row_count > MAX_DIM || cols > MAX_DIM {
            return Err(BoardError::InvalidDimensions { rows: row_count, cols });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(BoardError::Ragged { row: y, expected: cols, got: row.len() });
            }
        }
        Ok(Self { rows })
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

// =============================================================================
// ACCESS
// =============================================================================

impl Board {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        y < self.rows() && x < self.cols()
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Place or overwrite the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        self.rows[y][x] = cell;
        Ok(())
    }

    /// Number of stones currently on the board.
    #[must_use]
    pub fn stones(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Whether every cell holds a stone.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Remove all stones, keeping the dimensions.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::Empty);
        }
    }

    /// Iterate rows top to bottom; each row is a slice of cells left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
