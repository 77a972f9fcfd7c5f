//! Tests for the tic-tac-toe rules engine.

use strictly_tictactoe::{Cell, Engine, Marker, Phase, RoundOutcome};

fn started() -> Engine {
    let mut engine = Engine::new();
    engine.start("A", "B");
    engine
}

fn play_all(engine: &mut Engine, moves: &[usize]) -> RoundOutcome {
    let mut last = RoundOutcome::Rejected;
    for &index in moves {
        last = engine.play_round(index);
        assert!(last.is_accepted(), "move {} was rejected", index);
    }
    last
}

#[test]
fn test_start_assigns_markers_and_turn() {
    let mut engine = Engine::new();
    assert_eq!(engine.phase(), Phase::NotStarted);
    assert!(engine.current_player().is_none());

    let [one, two] = engine.start("A", "B");
    assert_eq!((one.name().as_str(), *one.marker()), ("A", Marker::X));
    assert_eq!((two.name().as_str(), *two.marker()), ("B", Marker::O));
    assert_eq!(engine.current_player(), Some(&one));
    assert!(engine.is_ongoing());
}

#[test]
fn test_blank_names_default() {
    let mut engine = Engine::new();
    let [one, two] = engine.start("", "   ");
    assert_eq!(one.name(), "Player 1");
    assert_eq!(two.name(), "Player 2");
}

#[test]
fn test_next_turn_then_occupied_rejected() {
    let mut engine = started();
    match engine.play_round(0) {
        RoundOutcome::NextTurn(next) => assert_eq!(next.name(), "B"),
        other => panic!("expected next turn, got {:?}", other),
    }
    assert_eq!(engine.play_round(0), RoundOutcome::Rejected);
    assert_eq!(engine.current_player().unwrap().name(), "B");
}

#[test]
fn test_turn_alternates_and_holds_on_rejection() {
    let mut engine = started();
    assert_eq!(engine.turn(), 0);
    engine.play_round(4);
    assert_eq!(engine.turn(), 1);
    engine.play_round(4);
    assert_eq!(engine.turn(), 1);
    engine.play_round(42);
    assert_eq!(engine.turn(), 1);
    engine.play_round(0);
    assert_eq!(engine.turn(), 0);
}

#[test]
fn test_top_row_win() {
    let mut engine = started();
    match play_all(&mut engine, &[0, 3, 1, 4, 2]) {
        RoundOutcome::Winner(winner) => {
            assert_eq!(winner.name(), "A");
            assert_eq!(*winner.marker(), Marker::X);
        }
        other => panic!("expected winner, got {:?}", other),
    }
    assert_eq!(engine.phase(), Phase::Finished);
    assert!(!engine.is_ongoing());
}

#[test]
fn test_second_player_can_win() {
    let mut engine = started();
    match play_all(&mut engine, &[0, 2, 1, 4, 8, 6]) {
        RoundOutcome::Winner(winner) => assert_eq!(*winner.marker(), Marker::O),
        other => panic!("expected winner, got {:?}", other),
    }
}

#[test]
fn test_tie() {
    // X O X / X O O / O X X
    let mut engine = started();
    let outcome = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcome, RoundOutcome::Tie);
    assert!(engine.board().is_full());
    assert_eq!(engine.phase(), Phase::Finished);
}

#[test]
fn test_win_on_last_cell_beats_tie() {
    // X O X / O X O / O X X, final X at 8 fills the board and wins
    let mut engine = started();
    let outcome = play_all(&mut engine, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert!(engine.board().is_full());
    match outcome {
        RoundOutcome::Winner(winner) => assert_eq!(*winner.marker(), Marker::X),
        other => panic!("expected winner, got {:?}", other),
    }
}

#[test]
fn test_moves_rejected_after_finish() {
    let mut engine = started();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.board().clone();
    assert_eq!(engine.play_round(8), RoundOutcome::Rejected);
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_rejected_before_start() {
    let mut engine = Engine::new();
    assert_eq!(engine.play_round(0), RoundOutcome::Rejected);
    assert_eq!(engine.board().get(0), Some(Cell::Empty));
}

#[test]
fn test_restart_then_move_rejected() {
    let mut engine = started();
    engine.play_round(0);
    engine.restart();

    assert_eq!(engine.phase(), Phase::NotStarted);
    assert!(engine.current_player().is_none());
    assert!(engine.players().is_none());
    assert_eq!(engine.board().occupied(), 0);
    assert_eq!(engine.play_round(0), RoundOutcome::Rejected);

    engine.restart();
    assert_eq!(engine.phase(), Phase::NotStarted);
}

#[test]
fn test_start_mid_game_resets() {
    let mut engine = started();
    engine.play_round(0);
    engine.play_round(1);
    engine.start("C", "D");
    assert_eq!(engine.board().occupied(), 0);
    assert_eq!(engine.turn(), 0);
    assert_eq!(engine.current_player().unwrap().name(), "C");
}

#[test]
fn test_sessions_are_independent() {
    let mut first = started();
    let second = started();
    first.play_round(4);
    assert_eq!(second.board().occupied(), 0);
}
