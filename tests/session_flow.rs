use std::time::Duration;

use taquin::persist::{load_scores, save_scores};
use taquin::{Direction, GameState, GameStats, Input, Key, Outcome, Session};

fn key(k: Key) -> Input {
    Input::Key(k)
}

/// Plays a fresh solved 3x3 board back and forth, ending on the solved
/// board after exactly `2 * pairs` moves. Only the final move goes through
/// the state machine, so only it can trigger the win.
fn solve_in(s: &mut Session, pairs: u32) -> Outcome {
    s.init(3).unwrap();
    let mut last = Outcome::Rejected;
    for i in 0..pairs {
        assert!(s.make_move(1, 2));
        if i + 1 < pairs {
            assert!(s.make_move(2, 2));
        } else {
            last = s.handle(key(Key::Arrow(Direction::Left)));
        }
    }
    last
}

#[test]
fn full_game_cycle() {
    let mut s = Session::seeded(5);
    assert_eq!(s.state(), GameState::Menu);
    assert_eq!(s.handle(key(Key::Digit(3))), Outcome::Accepted);
    assert_eq!(s.state(), GameState::Playing);

    s.tick(Duration::from_millis(1500));
    assert_eq!(s.stats().seconds, 1);

    assert_eq!(s.handle(key(Key::Char('r'))), Outcome::Accepted);
    assert_eq!(s.stats(), GameStats::default());

    assert_eq!(s.handle(key(Key::Escape)), Outcome::Accepted);
    assert_eq!(s.state(), GameState::Menu);
    assert_eq!(s.handle(Input::Quit), Outcome::Quit);
}

#[test]
fn best_moves_never_regress() {
    let mut s = Session::seeded(1);
    s.handle(key(Key::Digit(3)));
    assert_eq!(s.best().best_moves(3), None);

    assert_eq!(solve_in(&mut s, 21), Outcome::Won);
    assert_eq!(s.state(), GameState::Win);
    assert_eq!(s.best().best_moves(3), Some(42));

    assert_eq!(s.handle(key(Key::Char('r'))), Outcome::Accepted);
    assert_eq!(solve_in(&mut s, 25), Outcome::Won);
    assert_eq!(s.stats().moves, 50);
    assert_eq!(s.best().best_moves(3), Some(42));
}

#[test]
fn best_scores_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut s = Session::seeded(1);
    s.handle(key(Key::Digit(3)));
    assert_eq!(solve_in(&mut s, 3), Outcome::Won);
    save_scores(&path, s.best()).unwrap();

    let restored = load_scores(&path).unwrap();
    assert_eq!(restored.best_moves(3), Some(6));
    assert_eq!(&restored, s.best());
}

#[test]
fn invalid_input_is_silent() {
    let mut s = Session::seeded(8);
    s.handle(key(Key::Digit(4)));
    let board = s.board().clone();
    let stats = s.stats();
    for input in [
        key(Key::Digit(3)),
        key(Key::Char('x')),
        key(Key::Space),
        Input::Click { x: 0, y: 0 },
        Input::Click { x: u16::MAX, y: u16::MAX },
    ] {
        assert_eq!(s.handle(input), Outcome::Rejected);
    }
    assert_eq!(s.board(), &board);
    assert_eq!(s.stats(), stats);
    assert_eq!(s.state(), GameState::Playing);
}

#[test]
fn reset_clears_a_stored_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut s = Session::seeded(2);
    s.handle(key(Key::Digit(3)));
    assert_eq!(solve_in(&mut s, 4), Outcome::Won);
    save_scores(&path, s.best()).unwrap();

    let mut best = load_scores(&path).unwrap();
    assert_eq!(best.best_moves(3), Some(8));
    best.clear();
    save_scores(&path, &best).unwrap();
    assert!(load_scores(&path).unwrap().is_empty());
}
