mod board;
mod engine;
mod error;
mod phases;
mod position;
mod types;

pub mod rules;

pub use board::{Board, CELL_COUNT};
pub use engine::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Engine};
pub use error::MoveError;
pub use phases::{Phase, RoundOutcome};
pub use position::Position;
pub use types::{Cell, Marker, Player};
