//! The 3x3 grid.

use super::error::MoveError;
use super::position::Position;
use super::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells only go from empty to occupied through [`Board::set_cell`]; the only
/// way back to empty is [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `marker` into the cell at `index`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] if `index` is not in 0-8.
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker.
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, marker: Marker) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::InvalidIndex(index))?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied(index));
        }
        *cell = Cell::Occupied(marker);
        Ok(())
    }

    /// Gets the cell at the given index, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a named position.
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns a snapshot of all cells.
    ///
    /// The array is a copy; changing it does not affect the board.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
