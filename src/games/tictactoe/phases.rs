//! Session phases and round outcomes.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// No players yet; moves are rejected.
    #[default]
    #[display("Not started")]
    NotStarted,
    /// Moves are accepted.
    #[display("In progress")]
    InProgress,
    /// A win or tie has been detected; moves are rejected until restart.
    #[display("Finished")]
    Finished,
}

/// Result of a single [`Engine::play_round`](super::Engine::play_round) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "player", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Move was not applied: out of range, occupied, or no game running.
    Rejected,
    /// The mover completed a line.
    Winner(Player),
    /// Board is full with no line.
    Tie,
    /// Game continues; carries the player now on turn.
    NextTurn(Player),
}

impl RoundOutcome {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, RoundOutcome::Rejected)
    }

    /// Returns true if this outcome ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundOutcome::Winner(_) | RoundOutcome::Tie)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Rejected => write!(f, "Invalid move: spot taken or game not started."),
            RoundOutcome::Winner(player) => write!(f, "{} wins!", player.name()),
            RoundOutcome::Tie => write!(f, "It's a tie!"),
            RoundOutcome::NextTurn(player) => {
                write!(f, "{}'s turn ({})", player.name(), player.marker())
            }
        }
    }
}
