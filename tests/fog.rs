use shadowchess::coord::Position;
use shadowchess::piece::PieceKind;
use shadowchess::shadows::{ShadowBoard, ShadowPiece, Team};

fn pos(x: u8, y: u8) -> Position {
    Position::new(x, y).unwrap()
}

#[test]
fn visibility_is_chebyshev_one() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::new(PieceKind::Knight, Team::Player, pos(3, 3)));
    for cell in Position::all() {
        let expected = cell.chebyshev(pos(3, 3)) <= 1;
        assert_eq!(board.is_visible(cell, Team::Player), expected, "cell {}", cell);
    }
}

#[test]
fn corner_piece_reveals_clipped_block() {
    let mut board = ShadowBoard::new();
    board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Player, pos(0, 7)));
    let fog = *board.refresh_fog(Team::Player);
    let visible = fog.iter().flatten().filter(|hidden| !**hidden).count();
    assert_eq!(visible, 4);
}

#[test]
fn fog_follows_the_piece() {
    let mut board = ShadowBoard::new();
    let rook = board.add_piece(ShadowPiece::new(PieceKind::Rook, Team::Player, pos(0, 7))).unwrap();
    assert!(board.is_visible(pos(1, 6), Team::Player));
    assert!(!board.is_visible(pos(0, 2), Team::Player));

    assert!(board.move_or_attack(rook, pos(0, 2)).is_success());
    assert!(!board.is_visible(pos(1, 6), Team::Player));
    assert!(board.is_visible(pos(0, 2), Team::Player));
    assert!(board.is_visible(pos(1, 1), Team::Player));
}

#[test]
fn teams_have_separate_fog() {
    let mut board = ShadowBoard::standard();
    assert!(board.is_visible(pos(4, 0), Team::Enemy));
    assert!(!board.is_visible(pos(4, 0), Team::Player));
    assert!(board.is_visible(pos(4, 5), Team::Player));
    assert!(!board.is_visible(pos(4, 5), Team::Enemy));
    assert!(!board.is_visible(pos(4, 3), Team::Player));
    assert!(!board.is_visible(pos(4, 3), Team::Enemy));
}
