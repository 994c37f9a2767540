//! Shadows: the RPG variant. Pieces carry hit points and damage, captures
//! become attacks, each team only sees around its own pieces, and the enemy
//! side is played by a boss AI that can summon minions.

pub mod ai;
pub mod board;
pub mod game;
pub mod params;
pub mod piece;

pub use self::ai::{AiMove, BossAi};
pub use self::board::{FogGrid, MoveHook, MoveOutcome, ShadowBoard, ShadowTrail};
pub use self::game::{EnemyTurn, Outcome, ShadowsGame};
pub use self::params::{stats_for, PieceStats, ShadowsParams, BOSS_STATS};
pub use self::piece::{PieceId, ShadowPiece, Team};
