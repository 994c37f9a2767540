//! Boss AI: one decision per enemy turn plus an independent summon roll.
//!
//! Decision priority: attack anything in reach, otherwise close in on the
//! player king, otherwise a random move. Enemy pieces are scanned in id
//! order, which is stable for the life of a board.

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::board::ShadowBoard;
use super::params::ShadowsParams;
use super::piece::{PieceId, ShadowPiece, Team};
use crate::coord::Position;
use crate::piece::PieceKind;

// Neighbour scan order for summoning.
const SUMMON_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMove {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
}

pub struct BossAi {
    rng: StdRng,
    summon_chance: f64,
}

impl BossAi {
    pub fn new(params: &ShadowsParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            summon_chance: params.summon_chance,
        }
    }

    /// The enemy's move this turn, or `None` when no enemy piece can move.
    pub fn decide(&mut self, board: &ShadowBoard) -> Option<AiMove> {
        let enemies = board.pieces_of(Team::Enemy);

        // 1. attack
        for piece in &enemies {
            for to in board.candidate_moves(piece.id) {
                let target = board.piece_at(to.x as i32, to.y as i32);
                if target.is_some_and(|t| t.team == Team::Player) {
                    return Some(Self::plan(piece, to));
                }
            }
        }

        // 2. advance on the player king
        if let Some(king) = board.player_king() {
            let goal = king.position;
            for piece in &enemies {
                let mut moves = board.candidate_moves(piece.id);
                moves.sort_by_key(|m| m.manhattan(goal));
                if let Some(&to) = moves.first() {
                    return Some(Self::plan(piece, to));
                }
            }
        }

        // 3. anything at all
        for piece in &enemies {
            let moves = board.candidate_moves(piece.id);
            if let Some(&to) = moves.choose(&mut self.rng) {
                return Some(Self::plan(piece, to));
            }
        }

        None
    }

    fn plan(piece: &ShadowPiece, to: Position) -> AiMove {
        AiMove {
            piece: piece.id,
            from: piece.position,
            to,
        }
    }

    /// Roll for a summon; on success a fresh enemy pawn lands on a random
    /// free cell next to the boss. Returns where it appeared.
    pub fn summon(&mut self, board: &mut ShadowBoard) -> Option<Position> {
        if self.rng.random::<f64>() >= self.summon_chance {
            return None;
        }
        let boss = board.boss()?.position;
        let free: Vec<Position> = SUMMON_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| boss.offset(dx, dy))
            .filter(|p| board.piece_at(p.x as i32, p.y as i32).is_none())
            .collect();
        let &cell = free.choose(&mut self.rng)?;
        board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Enemy, cell))?;
        info!("the boss summons a shadow at {}", cell);
        Some(cell)
    }
}
