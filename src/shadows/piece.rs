use serde::{Deserialize, Serialize};

use super::params::{stats_for, BOSS_STATS};
use crate::coord::Position;
use crate::movegen::Mover;
use crate::piece::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Player => Team::Enemy,
            Team::Enemy => Team::Player,
        }
    }

    /// The player starts at the bottom of the grid and advances upward.
    pub fn forward(self) -> i8 {
        match self {
            Team::Player => -1,
            Team::Enemy => 1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Team::Player => 0,
            Team::Enemy => 1,
        }
    }
}

/// Stable handle of a piece on a `ShadowBoard`; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowPiece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub team: Team,
    pub position: Position,
    pub hp: i32,
    pub damage: i32,
    pub is_boss: bool,
    pub moves_made: u32,
}

impl ShadowPiece {
    /// A regular piece with its kind's stats. The id is assigned when the
    /// board accepts the piece.
    pub fn new(kind: PieceKind, team: Team, position: Position) -> Self {
        let stats = stats_for(kind);
        Self {
            id: PieceId(0),
            kind,
            team,
            position,
            hp: stats.hp,
            damage: stats.damage,
            is_boss: false,
            moves_made: 0,
        }
    }

    /// The enemy king as boss.
    pub fn boss(position: Position) -> Self {
        Self {
            hp: BOSS_STATS.hp,
            damage: BOSS_STATS.damage,
            is_boss: true,
            ..Self::new(PieceKind::King, Team::Enemy, position)
        }
    }

    /// Apply incoming damage; true when this hit kills.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        self.hp -= damage;
        self.hp <= 0
    }

    pub fn display_name(&self) -> &'static str {
        if self.is_boss {
            BOSS_STATS.name
        } else {
            stats_for(self.kind).name
        }
    }

    pub(crate) fn mover(&self) -> Mover<Team> {
        Mover {
            kind: self.kind,
            side: self.team,
            origin: self.position,
            forward: self.team.forward(),
            unmoved: self.moves_made == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_damage_kills() {
        let origin = Position::new(0, 6).unwrap();
        let mut pawn = ShadowPiece::new(PieceKind::Pawn, Team::Player, origin);
        assert!(!pawn.take_hit(10));
        assert_eq!(pawn.hp, 10);
        assert!(pawn.take_hit(10));
    }

    #[test]
    fn boss_uses_boss_stats() {
        let boss = ShadowPiece::boss(Position::new(4, 0).unwrap());
        assert_eq!((boss.hp, boss.damage), (300, 50));
        assert_eq!(boss.team, Team::Enemy);
        assert_eq!(boss.display_name(), "Fallen King");
    }
}
