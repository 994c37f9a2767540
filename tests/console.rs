use shadowchess::bridge::Level;
use shadowchess::console::{process_line, ClassicalConsole, Console, ShadowsConsole};
use shadowchess::shadows::{ShadowsParams, Team};

fn classical() -> ClassicalConsole {
    ClassicalConsole::new(None, Level::Medium)
}

#[test]
fn classical_moves_and_reports() {
    let mut console = classical();
    assert_eq!(process_line("e2e4", &mut console), vec!["ok e2e4", "Black to move"]);
    assert_eq!(process_line("move e2e4", &mut console), vec!["illegal move e2e4"]);
    assert_eq!(console.board().history().len(), 1);

    let fen = process_line("fen", &mut console);
    assert_eq!(fen, vec!["rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"]);
}

#[test]
fn classical_lists_knight_moves() {
    let mut console = classical();
    let out = process_line("moves g1", &mut console);
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("g1: "));
    assert!(out[0].contains("f3") && out[0].contains("h3"));
}

#[test]
fn classical_json_snapshot_parses() {
    let mut console = classical();
    process_line("d2d4", &mut console);
    let out = process_line("json", &mut console);
    let value: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
    assert_eq!(value["turn"], "Black");
    assert_eq!(value["status"], "Playing");
    assert_eq!(value["pieces"].as_array().unwrap().len(), 32);
    assert_eq!(value["history"].as_array().unwrap().len(), 1);
}

#[test]
fn classical_mate_is_announced() {
    let mut console = classical();
    for lan in ["f2f3", "e7e5", "g2g4"] {
        process_line(lan, &mut console);
    }
    let out = process_line("d8h4", &mut console);
    assert_eq!(out, vec!["ok d8h4", "checkmate, Black wins"]);
    assert_eq!(process_line("a2a3", &mut console), vec!["game over, type new to restart"]);
    assert_eq!(process_line("new", &mut console), vec!["new game"]);
    assert!(console.board().history().is_empty());
}

#[test]
fn hint_without_engine_is_explained() {
    let mut console = classical();
    assert_eq!(process_line("hint", &mut console), vec!["no engine configured (use --engine)"]);
}

#[test]
fn quit_stops_the_console() {
    let mut console = classical();
    assert!(console.is_running());
    assert!(process_line("quit", &mut console).is_empty());
    assert!(!console.is_running());
}

#[test]
fn shadows_player_move_gets_an_answer() {
    let mut console = ShadowsConsole::new(ShadowsParams::new().seed(5).summon_chance(0.0));
    let out = process_line("e7e5", &mut console);
    assert_eq!(out[0], "you move e7e5");
    assert!(out.len() >= 2);
    assert_eq!(console.game().turn(), Team::Player);
    assert_eq!(console.game().enemy_turns(), 1);
}

#[test]
fn shadows_rejects_bad_moves_without_enemy_turn() {
    let mut console = ShadowsConsole::new(ShadowsParams::new().seed(5));
    assert_eq!(process_line("e7e4", &mut console), vec!["you cannot go there"]);
    assert_eq!(process_line("e2e3", &mut console), vec!["you cannot go there"]);
    assert_eq!(console.game().enemy_turns(), 0);
    assert_eq!(process_line("fen", &mut console), vec!["not available in shadows mode"]);
}

#[test]
fn shadows_board_and_status() {
    let mut console = ShadowsConsole::new(ShadowsParams::new().seed(5));
    let board = process_line("board", &mut console);
    assert_eq!(board.len(), 9);
    assert_eq!(board[7], "8 R N B Q K B N R ");

    let status = process_line("status", &mut console);
    assert_eq!(status.len(), 17);
    assert!(status.contains(&"King e8 100 hp".to_string()));
    assert_eq!(status[16], "enemy turns: 0");
}
