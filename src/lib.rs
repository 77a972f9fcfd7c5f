//! Strictly Tic-Tac-Toe - a two-player tic-tac-toe rules engine
//!
//! # Architecture
//!
//! - **Board**: the 9 cells, with occupancy-checked writes
//! - **Engine**: players, turn order, win/tie detection
//! - **TUI**: terminal front end that drives the engine from key presses
//! - **Replay**: headless play of a scripted move list
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Engine, RoundOutcome};
//!
//! let mut engine = Engine::new();
//! engine.start("Ann", "Bob");
//! assert!(matches!(engine.play_round(4), RoundOutcome::NextTurn(_)));
//! assert_eq!(engine.play_round(4), RoundOutcome::Rejected);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Replay
pub use replay::{Transcript, TranscriptEntry, parse_moves, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, Cell, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Engine, Marker, MoveError,
    Phase, Player, Position, RoundOutcome, rules,
};
