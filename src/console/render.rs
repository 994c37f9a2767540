//! Text rendering of the Shadows grid as seen by one team.

use crate::coord::BOARD_SIZE;
use crate::shadows::{ShadowBoard, Team};

/// Rows top-down (row label = y + 1). Enemy pieces only show outside the
/// player's fog; own pieces always show.
pub fn render_shadows(board: &mut ShadowBoard, viewer: Team) -> Vec<String> {
    board.refresh_fog(viewer);
    let fog = board.fog(viewer);
    let mut lines = Vec::with_capacity(BOARD_SIZE as usize + 1);
    for y in 0..BOARD_SIZE {
        let mut row = format!("{} ", y + 1);
        for x in 0..BOARD_SIZE {
            let hidden = fog[y as usize][x as usize];
            let ch = match board.piece_at(x as i32, y as i32) {
                Some(p) if p.team == viewer => p.kind.letter().to_ascii_uppercase(),
                _ if hidden => '#',
                Some(p) if p.is_boss => '@',
                Some(p) => p.kind.letter(),
                None => '.',
            };
            row.push(ch);
            row.push(' ');
        }
        lines.push(row);
    }
    lines.push("  a b c d e f g h".to_string());
    lines
}
