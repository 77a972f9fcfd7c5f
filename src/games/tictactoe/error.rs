//! Move rejection reasons.

/// Why a move was not applied.
///
/// The engine never surfaces these past [`RoundOutcome::Rejected`](super::RoundOutcome::Rejected);
/// they exist so the board can report what went wrong and the engine can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is outside 0-8.
    #[display("Index {} is outside the board (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// No game is in progress.
    #[display("No game in progress")]
    NotStarted,
}

impl std::error::Error for MoveError {}
