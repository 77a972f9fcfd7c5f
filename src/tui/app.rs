//! Application state and key handling.
//!
//! `App` is the presentation adapter: it turns key presses into engine calls
//! and keeps the text the UI shows. It never touches the terminal, so it can
//! be driven directly from tests.

use crate::config::GameConfig;
use crate::games::tictactoe::{Engine, Phase, Position, RoundOutcome, rules};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, instrument};

use super::input::{digit_to_index, move_cursor};

/// Status shown while waiting for names.
pub const SETUP_MESSAGE: &str = "Enter names and start the game.";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entering player names.
    Setup,
    /// Board is on screen.
    Playing,
}

/// Which name field has focus on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    /// First player (X).
    #[default]
    One,
    /// Second player (O).
    Two,
}

impl NameField {
    /// Switches focus to the other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    screen: Screen,
    names: [String; 2],
    focus: NameField,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates the application on the setup screen with names from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            engine: Engine::new(),
            screen: Screen::Setup,
            names: [config.player_one().clone(), config.player_two().clone()],
            focus: NameField::default(),
            cursor: Position::Center,
            status_message: SETUP_MESSAGE.to_string(),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Backspace => {
                self.names[self.focus.index()].pop();
            }
            KeyCode::Enter => self.start(),
            KeyCode::Char(c) if !c.is_control() => {
                self.names[self.focus.index()].push(c);
            }
            _ => {}
        }
        Control::Continue
    }

    fn handle_playing_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select(self.cursor.to_index());
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.select(index);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
        Control::Continue
    }

    /// Starts a game with the names currently typed in.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        let [one, two] = self.engine.start(&self.names[0], &self.names[1]);
        self.names = [one.name().clone(), two.name().clone()];
        self.screen = Screen::Playing;
        self.cursor = Position::Center;
        self.status_message = format!("{}'s turn ({})", one.name(), one.marker());
    }

    /// Plays the cell at `index` and updates the status line.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> RoundOutcome {
        let outcome = self.engine.play_round(index);
        debug!(%outcome, "Round played");
        self.status_message = match (&outcome, self.engine.phase()) {
            (RoundOutcome::Rejected, Phase::Finished) => {
                format!("{} Press 'r' to play again.", outcome)
            }
            (RoundOutcome::Winner(_) | RoundOutcome::Tie, _) => {
                format!("{} Press 'r' to play again or 'q' to quit.", outcome)
            }
            _ => outcome.to_string(),
        };
        outcome
    }

    /// Ends the game and returns to the setup screen, keeping the names.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.engine.restart();
        self.screen = Screen::Setup;
        self.focus = NameField::One;
        self.status_message = SETUP_MESSAGE.to_string();
    }

    /// Cells of the winning line once the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        if self.engine.phase() != Phase::Finished {
            return None;
        }
        let marker = *self.engine.current_player()?.marker();
        rules::winning_line(self.engine.board(), marker)
    }

    /// Gets the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the typed player names.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Gets the focused name field.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Marker};

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn started(one: &str, two: &str) -> App {
        let mut app = App::new(&GameConfig::default());
        type_text(&mut app, one);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, two);
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_starts_on_setup_screen() {
        let app = App::new(&GameConfig::default());
        assert_eq!(app.screen(), Screen::Setup);
        assert_eq!(app.status_message(), SETUP_MESSAGE);
        assert!(!app.engine().is_ongoing());
    }

    #[test]
    fn test_name_entry_and_start() {
        let app = started("Ann", "Bob");
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.status_message(), "Ann's turn (X)");
        assert_eq!(app.engine().current_player().unwrap().name(), "Ann");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = App::new(&GameConfig::default());
        type_text(&mut app, "Anna");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.names()[0], "Ann");
        assert_eq!(app.focus(), NameField::One);
    }

    #[test]
    fn test_blank_names_fall_back() {
        let app = started("", "  ");
        assert_eq!(app.names()[0], "Player 1");
        assert_eq!(app.names()[1], "Player 2");
        assert_eq!(app.status_message(), "Player 1's turn (X)");
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = started("A", "B");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.engine().board().at(Position::TopCenter),
            Cell::Occupied(Marker::X)
        );
        assert_eq!(app.status_message(), "B's turn (O)");
    }

    #[test]
    fn test_occupied_cell_shows_invalid_message() {
        let mut app = started("A", "B");
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(
            app.status_message(),
            "Invalid move: spot taken or game not started."
        );
        assert_eq!(app.engine().current_player().unwrap().name(), "B");
    }

    #[test]
    fn test_win_highlights_line() {
        let mut app = started("A", "B");
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert!(app.status_message().starts_with("A wins!"));
        assert_eq!(
            app.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        press(&mut app, KeyCode::Char('9'));
        assert!(app.status_message().starts_with("Invalid move"));
    }

    #[test]
    fn test_restart_returns_to_setup_keeping_names() {
        let mut app = started("A", "B");
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::Setup);
        assert_eq!(app.names()[0], "A");
        assert!(app.engine().board().cells().iter().all(|c| c.is_empty()));
        assert_eq!(app.engine().phase(), Phase::NotStarted);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = started("A", "B");
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);

        let mut app = App::new(&GameConfig::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Continue);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
    }
}
