//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Marker, Position};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `marker`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: Marker) -> Option<[Position; 3]> {
    let held = Cell::Occupied(marker);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&pos| board.at(pos) == held))
}

/// Checks if `marker` holds any complete line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, marker: Marker) -> bool {
    winning_line(board, marker).is_some()
}
