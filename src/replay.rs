//! Headless replay of a scripted move list.
//!
//! Feeds indices to a fresh [`Engine`] and records what happened to each one,
//! so games can be driven and inspected from the command line.

use crate::games::tictactoe::{Board, Engine, Marker, Player, RoundOutcome};
use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, instrument};

/// One scripted move and its result.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, new)]
pub struct TranscriptEntry {
    /// Requested cell index.
    index: usize,
    /// Player on turn when the move was submitted, if a game was running.
    player: Option<String>,
    /// Marker of that player.
    marker: Option<Marker>,
    /// What the engine answered.
    outcome: RoundOutcome,
}

/// Full record of a replayed game.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct Transcript {
    /// The two players as created at start.
    players: [Player; 2],
    /// One entry per scripted move.
    moves: Vec<TranscriptEntry>,
    /// Board after the last move.
    board: Board,
    /// Whether the game is still accepting moves.
    ongoing: bool,
}

impl Transcript {
    /// Outcome of the last accepted move, if any.
    pub fn final_outcome(&self) -> Option<&RoundOutcome> {
        self.moves
            .iter()
            .rev()
            .map(|entry| &entry.outcome)
            .find(|outcome| outcome.is_accepted())
    }

    /// Renders the transcript as plain text.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{} vs {}\n",
            self.players[0], self.players[1]
        );
        for entry in &self.moves {
            let who = entry.player.as_deref().unwrap_or("-");
            out.push_str(&format!("{:>2}. {} -> {}\n", entry.index, who, entry.outcome));
        }
        out.push('\n');
        out.push_str(&self.board.display());
        out.push('\n');
        out
    }

    /// Renders the transcript as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize transcript")
    }
}

/// Parses a comma- or whitespace-separated list of cell indices.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .with_context(|| format!("Invalid move index: {:?}", token))
        })
        .collect()
}

/// Starts a game between the two names and plays `moves` in order.
///
/// Moves after the game has finished are still submitted, and come back
/// rejected.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(name_one: &str, name_two: &str, moves: &[usize]) -> Transcript {
    let mut engine = Engine::new();
    let players = engine.start(name_one, name_two);

    let entries = moves
        .iter()
        .map(|&index| {
            let mover = engine.is_ongoing().then(|| engine.current_player()).flatten();
            let player = mover.map(|p| p.name().clone());
            let marker = mover.map(|p| *p.marker());
            let outcome = engine.play_round(index);
            debug!(index, %outcome, "Replayed move");
            TranscriptEntry::new(index, player, marker, outcome)
        })
        .collect();

    Transcript {
        players,
        moves: entries,
        board: engine.board().clone(),
        ongoing: engine.is_ongoing(),
    }
}
