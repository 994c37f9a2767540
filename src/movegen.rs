//! Candidate move generation shared by the classical and Shadows boards.
//!
//! Generators only look at geometry and occupancy. Whether a move exposes
//! the mover's own king is decided by the classical board, never here.

use crate::coord::{Position, DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::piece::PieceKind;

/// "Piece at position" contract: the side owning the occupant of a cell.
///
/// The classical board answers from a sparse map, the Shadows board from a
/// dense grid; generators do not care which.
pub trait SquareView {
    type Side: Copy + Eq;

    fn side_at(&self, pos: Position) -> Option<Self::Side>;
}

/// Everything a generator needs to know about the moving piece.
#[derive(Debug, Clone, Copy)]
pub struct Mover<S> {
    pub kind: PieceKind,
    pub side: S,
    pub origin: Position,
    /// Pawn direction along y (+1 or -1).
    pub forward: i8,
    /// True while the piece has never moved (pawn double step).
    pub unmoved: bool,
}

pub fn candidate_moves<V: SquareView>(view: &V, mover: &Mover<V::Side>) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    match mover.kind {
        PieceKind::Pawn => pawn_moves(view, mover, &mut out),
        PieceKind::Knight => step_moves(view, mover, &KNIGHT_OFFSETS, &mut out),
        PieceKind::Bishop => ray_moves(view, mover, &DIAGONAL, &mut out),
        PieceKind::Rook => ray_moves(view, mover, &ORTHOGONAL, &mut out),
        PieceKind::Queen => {
            ray_moves(view, mover, &ORTHOGONAL, &mut out);
            ray_moves(view, mover, &DIAGONAL, &mut out);
        }
        PieceKind::King => step_moves(view, mover, &KING_OFFSETS, &mut out),
    }
    out
}

fn pawn_moves<V: SquareView>(view: &V, mover: &Mover<V::Side>, out: &mut Vec<Position>) {
    let dir = mover.forward;
    if let Some(one) = mover.origin.offset(0, dir) {
        if view.side_at(one).is_none() {
            out.push(one);
            if mover.unmoved {
                if let Some(two) = mover.origin.offset(0, 2 * dir) {
                    if view.side_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }
    for dx in [-1, 1] {
        if let Some(diag) = mover.origin.offset(dx, dir) {
            if matches!(view.side_at(diag), Some(s) if s != mover.side) {
                out.push(diag);
            }
        }
    }
}

// Knight and king: fixed offsets, no path blocking.
fn step_moves<V: SquareView>(
    view: &V,
    mover: &Mover<V::Side>,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dx, dy) in offsets {
        if let Some(dst) = mover.origin.offset(dx, dy) {
            match view.side_at(dst) {
                Some(s) if s == mover.side => {}
                _ => out.push(dst),
            }
        }
    }
}

fn ray_moves<V: SquareView>(
    view: &V,
    mover: &Mover<V::Side>,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dx, dy) in directions {
        let mut cur = mover.origin;
        while let Some(next) = cur.offset(dx, dy) {
            match view.side_at(next) {
                None => out.push(next),
                Some(s) => {
                    // blocker: capture if hostile, stop either way
                    if s != mover.side {
                        out.push(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
}
