//! Turn-based Shadows session: the player moves, then the enemy answers.

use log::info;
use serde::{Deserialize, Serialize};

use super::ai::{AiMove, BossAi};
use super::board::{MoveOutcome, ShadowBoard, ShadowTrail};
use super::params::ShadowsParams;
use super::piece::Team;
use crate::coord::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    /// The boss fell.
    Victory,
    /// The player king fell.
    Defeat,
}

/// What the enemy did with its turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnemyTurn {
    pub action: Option<(AiMove, MoveOutcome)>,
    pub summoned: Option<Position>,
}

impl EnemyTurn {
    /// No enemy piece could move.
    pub fn passed(&self) -> bool {
        self.action.is_none()
    }
}

pub struct ShadowsGame {
    board: ShadowBoard,
    ai: BossAi,
    turn: Team,
    outcome: Outcome,
    enemy_turns: u32,
}

impl ShadowsGame {
    pub fn new(params: ShadowsParams) -> Self {
        Self::with_board(ShadowBoard::standard(), params)
    }

    /// Start from a prepared board, player to move.
    pub fn with_board(mut board: ShadowBoard, params: ShadowsParams) -> Self {
        if params.shadow_trail {
            board.add_hook(Box::new(ShadowTrail));
        }
        let mut game = Self {
            board,
            ai: BossAi::new(&params),
            turn: Team::Player,
            outcome: Outcome::Ongoing,
            enemy_turns: 0,
        };
        game.update_outcome();
        game
    }

    pub fn board(&self) -> &ShadowBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut ShadowBoard {
        &mut self.board
    }

    pub fn turn(&self) -> Team {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn enemy_turns(&self) -> u32 {
        self.enemy_turns
    }

    /// Player moves the piece on `from`. The destination must be one of the
    /// piece's candidate moves; anything else is `Blocked` with no change.
    pub fn player_move(&mut self, from: Position, to: Position) -> MoveOutcome {
        if self.outcome != Outcome::Ongoing || self.turn != Team::Player {
            return MoveOutcome::Blocked;
        }
        let Some(piece) = self.board.piece_at(from.x as i32, from.y as i32) else {
            return MoveOutcome::Blocked;
        };
        if piece.team != Team::Player {
            return MoveOutcome::Blocked;
        }
        let id = piece.id;
        if !self.board.candidate_moves(id).contains(&to) {
            return MoveOutcome::Blocked;
        }
        let result = self.board.move_or_attack(id, to);
        if result.is_success() {
            self.turn = Team::Enemy;
            self.update_outcome();
        }
        result
    }

    /// Enemy move followed by the summon roll. Does nothing unless it is the
    /// enemy's turn in a running game; no summon once the move ends it.
    pub fn enemy_turn(&mut self) -> EnemyTurn {
        if self.outcome != Outcome::Ongoing || self.turn != Team::Enemy {
            return EnemyTurn::default();
        }
        let action = self.ai.decide(&self.board).map(|mv| {
            let result = self.board.move_or_attack(mv.piece, mv.to);
            (mv, result)
        });
        if action.is_none() {
            info!("no enemy piece can move; the enemy passes");
        }
        self.update_outcome();
        let summoned = if self.outcome == Outcome::Ongoing {
            self.ai.summon(&mut self.board)
        } else {
            None
        };

        self.enemy_turns += 1;
        self.turn = Team::Player;
        EnemyTurn { action, summoned }
    }

    fn update_outcome(&mut self) {
        let next = if self.board.boss_dead() {
            Outcome::Victory
        } else if self.board.player_dead() {
            Outcome::Defeat
        } else {
            Outcome::Ongoing
        };
        if next != self.outcome {
            info!("game over: {:?}", next);
        }
        self.outcome = next;
    }
}
