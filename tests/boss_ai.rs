use shadowchess::coord::Position;
use shadowchess::piece::PieceKind;
use shadowchess::shadows::{AiMove, BossAi, ShadowBoard, ShadowPiece, ShadowsParams, Team};

fn pos(x: u8, y: u8) -> Position {
    Position::new(x, y).unwrap()
}

fn ai(chance: f64, seed: u64) -> BossAi {
    BossAi::new(&ShadowsParams::new().summon_chance(chance).seed(seed))
}

#[test]
fn certain_summon_fills_the_only_free_neighbour() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::boss(pos(0, 0)));
    board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Enemy, pos(1, 0)));
    board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Player, pos(0, 1)));
    let before = board.piece_count();

    let cell = ai(1.0, 11).summon(&mut board);
    assert_eq!(cell, Some(pos(1, 1)));
    assert_eq!(board.piece_count(), before + 1);
    let minion = board.piece_at(1, 1).unwrap();
    assert_eq!(minion.kind, PieceKind::Pawn);
    assert_eq!(minion.team, Team::Enemy);
    assert_eq!(minion.moves_made, 0);
    assert!(!minion.is_boss);
    assert_eq!(minion.position.chebyshev(board.boss().unwrap().position), 1);
    assert!(board.is_consistent());
}

#[test]
fn summon_rate_tracks_the_configured_chance() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::boss(pos(4, 4)));
    let mut ai = ai(0.30, 2024);
    let trials = 2000;
    let mut hits = 0;
    for _ in 0..trials {
        if let Some(cell) = ai.summon(&mut board) {
            hits += 1;
            let id = board.piece_at(cell.x as i32, cell.y as i32).unwrap().id;
            board.remove_piece(id);
        }
    }
    let rate = hits as f64 / trials as f64;
    assert!((rate - 0.30).abs() < 0.05, "summon rate {}", rate);
}

#[test]
fn advance_picks_the_closest_cell_to_the_king() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::new(PieceKind::King, Team::Player, pos(5, 7)));
    let rook = board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Enemy, pos(0, 0))).unwrap();
    let mv = ai(0.0, 1).decide(&board);
    assert_eq!(mv, Some(AiMove { piece: rook, from: pos(0, 0), to: pos(0, 7) }));
}

#[test]
fn attack_on_the_king_comes_first() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::new(PieceKind::King, Team::Player, pos(7, 7)));
    let bishop = ShadowPiece::new(PieceKind::Bishop, Team::Enemy, pos(2, 2));
    let bishop = board.add_piece(bishop).unwrap();
    let mv = ai(0.0, 1).decide(&board).unwrap();
    assert_eq!(mv.piece, bishop);
    assert_eq!(mv.to, pos(7, 7));
}

#[test]
fn without_a_king_the_first_movable_enemy_wanders() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Player, pos(0, 5)));
    // stuck on the far row, scanned first
    board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Enemy, pos(3, 7)));
    let rook = board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Enemy, pos(7, 0))).unwrap();
    let candidates = board.candidate_moves(rook);

    let mv = ai(0.0, 77).decide(&board).unwrap();
    assert_eq!(mv.piece, rook);
    assert_eq!(mv.from, pos(7, 0));
    assert!(candidates.contains(&mv.to), "{} is not a rook move", mv.to);

    assert_eq!(ai(0.0, 77).decide(&board), Some(mv));
}

#[test]
fn no_movable_enemy_means_no_move() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::new(PieceKind::King, Team::Player, pos(0, 0)));
    assert_eq!(ai(0.0, 1).decide(&board), None);

    // an enemy pawn on the far row has nowhere to go
    board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Enemy, pos(3, 7)));
    assert_eq!(ai(0.0, 1).decide(&board), None);
}

#[test]
fn same_seed_same_game() {
    let run = |seed| {
        let mut board = ShadowBoard::standard();
        let mut ai = ai(0.5, seed);
        let mut trace = Vec::new();
        for _ in 0..10 {
            let mv = ai.decide(&board);
            if let Some(mv) = mv {
                board.move_or_attack(mv.piece, mv.to);
            }
            trace.push((mv, ai.summon(&mut board)));
        }
        trace
    };
    assert_eq!(run(42), run(42));
}
