//! Tests for the terminal console.

use std::io::Cursor;
use xo::{GameStatus, IndexBase, Player, Position, Square, XoConfig, replay};

fn play(config: XoConfig, input: &str) -> (xo::Game, String) {
    let mut console = xo::Console::new(config, Cursor::new(input.to_string()), Vec::new());
    console.run().expect("in-memory console run");
    let game = console.game().clone();
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (game, output)
}

#[test]
fn test_initial_frame_rendered() {
    let (_, output) = play(XoConfig::default(), "");
    assert_eq!(output, "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\nPlayer X's turn\n");
}

#[test]
fn test_win_through_console() {
    let (game, output) = play(XoConfig::default(), "0\n4\n1\n5\n2\n");
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(output.ends_with("X|X|X\n-+-+-\n3|O|O\n-+-+-\n6|7|8\nPlayer X wins\n"));
}

#[test]
fn test_occupied_cell_reported() {
    let (game, output) = play(XoConfig::default(), "3\n3\n");
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.board().get(Position::MiddleLeft), Square::Occupied(Player::X));
    assert!(output.contains("Cell 3 (Middle-left) is already taken."));
}

#[test]
fn test_silent_rejections() {
    let config = XoConfig::from_toml("report_rejections = false").unwrap();
    let (_, noisy) = play(XoConfig::default(), "3\n3\n42\n");
    let (_, quiet) = play(config, "3\n3\n42\n");

    // Two frames: the initial one and the one after the first move.
    assert_eq!(quiet.matches("turn").count(), 2);
    assert!(!quiet.contains("taken"));
    assert!(!quiet.contains("not on the board"));
    assert!(noisy.contains("Cell 42 is not on the board (0-8)."));
}

#[test]
fn test_move_after_game_over() {
    let (game, output) = play(XoConfig::default(), "0\n4\n1\n5\n2\n8\n");
    assert_eq!(game.board().get(Position::BottomRight), Square::Empty);
    assert!(output.contains("The game is over (won by X)."));
}

#[test]
fn test_reset_command() {
    let (game, output) = play(XoConfig::default(), "4\nreset\n");
    assert_eq!(game, xo::Game::new());
    assert_eq!(output.matches("Player X's turn").count(), 2);
}

#[test]
fn test_quit_stops_reading() {
    let (game, _) = play(XoConfig::default(), "4\nquit\n0\n");
    assert_eq!(game.state().history(), &[Position::Center]);
}

#[test]
fn test_unknown_input_is_ignored() {
    let (game, output) = play(XoConfig::default(), "hello\n\n4\n");
    assert_eq!(game.state().history(), &[Position::Center]);
    assert!(output.contains("Unrecognized input: \"hello\". Type \"help\" for commands."));
}

#[test]
fn test_one_based_numbering() {
    let config = XoConfig::default().with_index_base(IndexBase::One);
    let (game, output) = play(config, "1\n0\n9\n");
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::BottomRight), Square::Occupied(Player::O));
    assert!(output.starts_with("1|2|3\n"));
    assert!(output.contains("Cell 0 is not on the board (1-9)."));
}

#[test]
fn test_replay_text() {
    let mut out = Vec::new();
    let game = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], &XoConfig::default(), false, &mut out).unwrap();
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X\nDraw!\n"
    );
}

#[test]
fn test_replay_json_skips_rejected() {
    let mut out = Vec::new();
    replay(&[4, 4, 99, 0], &XoConfig::default(), true, &mut out).unwrap();
    let snapshot: xo::Snapshot = serde_json::from_slice(&out).unwrap();
    assert_eq!(snapshot.history, vec![Position::Center, Position::TopLeft]);
    assert_eq!(snapshot.current_player, Player::X);
    assert_eq!(snapshot.status_line, "Player X's turn");
}
