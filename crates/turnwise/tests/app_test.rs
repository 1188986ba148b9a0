//! Scripted runs of the terminal frontend.

use std::io::Cursor;
use turnwise::{App, EMPTY_LOG, replay};
use turnwise_tictactoe::{Cell, GameSession, GameStatus, PlayerRegistry, Symbol};

fn run_script(app: &mut App, script: &str) -> String {
    let mut out = Vec::new();
    app.run(Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_full_game_to_win() {
    let mut app = App::default();
    let output = run_script(
        &mut app,
        "rename X Ada\nrename O   Grace  \n0 0\n1 1\n0 1\n1 0\nselect 0 2\n2 2\nlog\nquit\n",
    );

    assert_eq!(app.session().status(), GameStatus::Won(Symbol::X));
    assert_eq!(app.session().log().len(), 5);
    assert!(output.contains("X is now called Ada."));
    assert!(output.contains("O is now called Grace."));
    assert!(output.contains("Ada won! Line: (0, 0) (0, 1) (0, 2)"));
    assert!(output.contains("Game is already over"));
    assert!(output.contains("#5 X selected (0, 2)"));
}

#[test]
fn test_blank_rename_reported_and_ignored() {
    let mut app = App::default();
    let output = run_script(&mut app, "rename X    \n");
    assert!(output.contains("Player name cannot be empty"));
    assert_eq!(app.session().player_name(Symbol::X), "Player 1");
}

#[test]
fn test_bad_lines_keep_the_loop_running() {
    let mut app = App::default();
    let output = run_script(&mut app, "undo\n\n9 9\n1\n0 0 junk\n1 1\n");
    assert!(output.contains("Unknown command \"undo\". Type 'help' for commands."));
    assert!(output.contains("Cell (9, 9) is outside the 3x3 board"));
    assert!(output.contains("Missing column"));
    assert!(output.contains("Unexpected \"junk\" after the command"));
    assert_eq!(app.session().log().len(), 1);
}

#[test]
fn test_restart_keeps_names() {
    let mut app = App::default();
    let output = run_script(&mut app, "rename o Grace\n1 1\nrestart\nlog\n");
    assert!(output.contains("New game started."));
    assert!(output.contains(EMPTY_LOG));
    assert!(app.session().log().is_empty());
    assert_eq!(app.session().player_name(Symbol::O), "Grace");
}

#[test]
fn test_draw_banner() {
    let mut app = App::default();
    let output = run_script(&mut app, "0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n");
    assert!(app.session().is_draw());
    assert!(output.contains("It's a draw!"));
}

#[test]
fn test_eof_ends_loop() {
    let mut app = App::default();
    let output = run_script(&mut app, "");
    assert!(output.starts_with("Type 'help' for commands."));
    assert!(output.contains("Player 1's turn (X)"));
}

#[test]
fn test_replay_text_reports_skips() {
    let mut session = GameSession::new();
    let moves = [Cell::new(0, 0), Cell::new(0, 0), Cell::new(1, 1)];
    let mut out = Vec::new();
    replay(&mut session, &moves, false, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Skipped (0, 0): Cell (0, 0) is already occupied"));
    assert!(output.contains("#2 O selected (1, 1)"));
    assert_eq!(session.log().len(), 2);
}

#[test]
fn test_replay_json_snapshot() {
    let players = PlayerRegistry::with_names("Ada", "Grace", 20).unwrap();
    let mut session = GameSession::with_players(players);
    let moves = [
        Cell::new(0, 0),
        Cell::new(1, 1),
        Cell::new(0, 1),
        Cell::new(1, 0),
        Cell::new(0, 2),
    ];
    let mut out = Vec::new();
    replay(&mut session, &moves, true, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["winner"], "Ada");
    assert_eq!(value["draw"], false);
    assert_eq!(value["log"].as_array().unwrap().len(), 5);
}
