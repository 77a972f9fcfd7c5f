//! Rules engine: players, turn order and terminal detection.

use super::board::Board;
use super::error::MoveError;
use super::phases::{Phase, RoundOutcome};
use super::rules;
use super::types::{Marker, Player};
use tracing::{debug, info, instrument};

/// Fallback name for the first player.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";
/// Fallback name for the second player.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// Tic-tac-toe session owning the board, the players and the turn.
///
/// The engine is an ordinary value; the caller owns it and may create as many
/// independent sessions as it likes.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    board: Board,
    players: Option<[Player; 2]>,
    turn: usize,
    phase: Phase,
}

impl Engine {
    /// Creates an engine in the `NotStarted` phase with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game, discarding any game in progress.
    ///
    /// The first player gets X and moves first. Blank names fall back to
    /// "Player 1" / "Player 2".
    #[instrument(skip(self))]
    pub fn start(&mut self, name_one: &str, name_two: &str) -> [Player; 2] {
        let players = [
            Player::new(name_one, DEFAULT_PLAYER_ONE, Marker::X),
            Player::new(name_two, DEFAULT_PLAYER_TWO, Marker::O),
        ];
        self.board.reset();
        self.turn = 0;
        self.phase = Phase::InProgress;
        self.players = Some(players.clone());
        info!(
            player_one = %players[0].name(),
            player_two = %players[1].name(),
            "Game started"
        );
        players
    }

    /// Plays the current player's marker at `index`.
    ///
    /// Win is checked before tie, so a move that fills the last cell and
    /// completes a line is reported as [`RoundOutcome::Winner`].
    #[instrument(skip(self), fields(phase = %self.phase, turn = self.turn))]
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        match self.try_play(index) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(%reason, "Move rejected");
                RoundOutcome::Rejected
            }
        }
    }

    fn try_play(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(MoveError::NotStarted);
        }
        let players = self.players.as_ref().ok_or(MoveError::NotStarted)?;
        let mover = &players[self.turn];
        let marker = *mover.marker();

        self.board.set_cell(index, marker)?;
        debug!(index, %marker, player = %mover.name(), "Move applied");

        if rules::has_won(&self.board, marker) {
            self.phase = Phase::Finished;
            info!(winner = %mover.name(), %marker, "Game won");
            return Ok(RoundOutcome::Winner(mover.clone()));
        }

        if rules::is_full(&self.board) {
            self.phase = Phase::Finished;
            info!("Game tied");
            return Ok(RoundOutcome::Tie);
        }

        self.turn = 1 - self.turn;
        Ok(RoundOutcome::NextTurn(players[self.turn].clone()))
    }

    /// Ends any game and returns to `NotStarted` with an empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.players = None;
        self.turn = 0;
        self.phase = Phase::NotStarted;
        self.board.reset();
        info!("Game restarted");
    }

    /// Returns the player on turn, or `None` before the first start.
    ///
    /// After a finished game this is the player who made the last move.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.turn])
    }

    /// Returns true while moves are accepted.
    pub fn is_ongoing(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, or `None` before the first start.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index (0 or 1) of the player on turn.
    pub fn turn(&self) -> usize {
        self.turn
    }
}
