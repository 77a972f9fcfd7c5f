//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Marker {
    /// Marker X (moves first).
    #[display("X")]
    X,
    /// Marker O (moves second).
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A participant: display name plus assigned marker.
///
/// Players are created by [`Engine::start`](super::Engine::start) and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display label.
    name: String,
    /// Marker this player places.
    marker: Marker,
}

impl Player {
    /// Creates a player, falling back to `default_name` when `name` is blank.
    #[instrument(skip(name, default_name))]
    pub fn new(name: &str, default_name: &str, marker: Marker) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            default_name
        } else {
            trimmed
        };
        Self {
            name: name.to_string(),
            marker,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}
