use shadowchess::coord::Position;
use shadowchess::piece::PieceKind;
use shadowchess::shadows::{MoveOutcome, ShadowBoard, ShadowPiece, ShadowTrail, Team};

fn pos(x: u8, y: u8) -> Position {
    Position::new(x, y).unwrap()
}

#[test]
fn exact_hp_kill_moves_the_attacker_in() {
    let mut board = ShadowBoard::new();
    // rook deals 15; give the target exactly 15 hp
    let rook = board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Player, pos(0, 7))).unwrap();
    let mut pawn = ShadowPiece::new(PieceKind::Pawn, Team::Enemy, pos(0, 2));
    pawn.hp = 15;
    let pawn = board.add_piece(pawn).unwrap();

    let outcome = board.move_or_attack(rook, pos(0, 2));
    assert!(matches!(outcome, MoveOutcome::Killed { from, to, ref victim }
        if from == pos(0, 7) && to == pos(0, 2) && victim.id == pawn));
    assert!(board.piece(pawn).is_none());
    let attacker = board.piece_at(0, 2).unwrap();
    assert_eq!(attacker.id, rook);
    assert_eq!(attacker.moves_made, 1);
    assert!(board.piece_at(0, 7).is_none());
    assert_eq!(board.piece_count(), 1);
    assert!(board.is_consistent());
}

#[test]
fn surviving_defender_keeps_both_in_place() {
    let mut board = ShadowBoard::new();
    let knight = ShadowPiece::new(PieceKind::Knight, Team::Player, pos(3, 4));
    let knight = board.add_piece(knight).unwrap();
    let tower = board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Enemy, pos(4, 2))).unwrap();

    // knight damage 20 against 60 hp
    assert_eq!(
        board.move_or_attack(knight, pos(4, 2)),
        MoveOutcome::Struck { target: tower, remaining_hp: 40 }
    );
    assert_eq!(board.piece(knight).unwrap().position, pos(3, 4));
    assert_eq!(board.piece(knight).unwrap().moves_made, 0);
    assert_eq!(board.piece(tower).unwrap().hp, 40);

    assert_eq!(
        board.move_or_attack(knight, pos(4, 2)),
        MoveOutcome::Struck { target: tower, remaining_hp: 20 }
    );
    assert!(matches!(board.move_or_attack(knight, pos(4, 2)), MoveOutcome::Killed { .. }));
    assert_eq!(board.piece_at(4, 2).unwrap().id, knight);
    assert!(board.is_consistent());
}

#[test]
fn friendly_target_is_blocked() {
    let mut board = ShadowBoard::standard();
    let rook = board.piece_at(0, 7).unwrap().id;
    assert_eq!(board.move_or_attack(rook, pos(0, 6)), MoveOutcome::Blocked);
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn boss_outlasts_a_queen_hit() {
    let mut board = ShadowBoard::new();
    let queen = ShadowPiece::new(PieceKind::Queen, Team::Player, pos(4, 3));
    let queen = board.add_piece(queen).unwrap();
    let boss = board.add_piece(ShadowPiece::boss(pos(4, 0))).unwrap();
    assert_eq!(
        board.move_or_attack(queen, pos(4, 0)),
        MoveOutcome::Struck { target: boss, remaining_hp: 270 }
    );
    assert!(!board.boss_dead());
    assert_eq!(board.boss().unwrap().display_name(), "Fallen King");
}

#[test]
fn add_piece_rejects_occupied_cell() {
    let mut board = ShadowBoard::standard();
    assert!(board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Enemy, pos(4, 0))).is_none());
    assert_eq!(board.piece_count(), 32);
    assert!(board.piece_at(-1, 3).is_none());
    assert!(board.piece_at(2, 8).is_none());
}

#[test]
fn shadow_trail_spawns_behind_a_moving_boss() {
    let mut board = ShadowBoard::new();
    board.add_hook(Box::new(ShadowTrail));
    let boss = board.add_piece(ShadowPiece::boss(pos(4, 0))).unwrap();
    let rook = board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Enemy, pos(0, 0))).unwrap();

    assert!(board.move_or_attack(rook, pos(0, 3)).is_success());
    assert_eq!(board.piece_count(), 2);

    assert!(board.move_or_attack(boss, pos(4, 1)).is_success());
    assert_eq!(board.piece_count(), 3);
    let minion = board.piece_at(4, 0).unwrap();
    assert_eq!((minion.kind, minion.team, minion.moves_made), (PieceKind::Pawn, Team::Enemy, 0));
    assert!(board.is_consistent());
}
