// Shadows board: dense 8x8 grid of piece ids, the live piece collection,
// combat resolution and per-team fog of war.

use std::collections::BTreeMap;

use log::{debug, info};

use super::piece::{PieceId, ShadowPiece, Team};
use crate::coord::{Position, BOARD_SIZE};
use crate::movegen::{candidate_moves, SquareView};
use crate::piece::PieceKind;

/// fog[y][x]; true = hidden.
pub type FogGrid = [[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Walked onto an empty cell.
    Moved { from: Position, to: Position },
    /// Killed the defender and took its cell.
    Killed { from: Position, to: Position, victim: ShadowPiece },
    /// Hit a defender that survived; the attacker stays put.
    Struck { target: PieceId, remaining_hp: i32 },
    /// Friendly occupant, unknown piece or off-board target.
    Blocked,
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

/// Runs after a piece relocates (plain move or kill), never after a hit
/// that leaves the attacker in place.
pub trait MoveHook: std::fmt::Debug {
    fn after_move(&mut self, board: &mut ShadowBoard, piece: PieceId, from: Position);
}

/// The boss leaves a minion on every cell it vacates.
#[derive(Debug, Default)]
pub struct ShadowTrail;

impl MoveHook for ShadowTrail {
    fn after_move(&mut self, board: &mut ShadowBoard, piece: PieceId, from: Position) {
        if !board.piece(piece).is_some_and(|p| p.is_boss) {
            return;
        }
        if board
            .add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Enemy, from))
            .is_some()
        {
            info!("the boss leaves a shadow at {}", from);
        }
    }
}

#[derive(Debug)]
pub struct ShadowBoard {
    grid: [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pieces: BTreeMap<PieceId, ShadowPiece>,
    fog: [FogGrid; 2],
    next_id: u32,
    hooks: Vec<Box<dyn MoveHook>>,
}

impl SquareView for ShadowBoard {
    type Side = Team;

    fn side_at(&self, pos: Position) -> Option<Team> {
        self.at(pos).map(|p| p.team)
    }
}

impl Default for ShadowBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadowBoard {
    /// Empty board, everything fogged.
    pub fn new() -> Self {
        Self {
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            pieces: BTreeMap::new(),
            fog: [[[true; BOARD_SIZE as usize]; BOARD_SIZE as usize]; 2],
            next_id: 1,
            hooks: Vec::new(),
        }
    }

    /// Player on rows 6-7, enemy on rows 0-1 with the boss king on (4, 0).
    pub fn standard() -> Self {
        let mut board = Self::new();
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            let x = x as u8;
            let back = Position { x, y: 7 };
            let front = Position { x, y: 6 };
            board.add_piece(ShadowPiece::new(kind, Team::Player, back));
            board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Player, front));
        }
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            let x = x as u8;
            let back = Position { x, y: 0 };
            let front = Position { x, y: 1 };
            let piece = if kind == PieceKind::King {
                ShadowPiece::boss(back)
            } else {
                ShadowPiece::new(kind, Team::Enemy, back)
            };
            board.add_piece(piece);
            board.add_piece(ShadowPiece::new(PieceKind::Pawn, Team::Enemy, front));
        }
        board.refresh_fog(Team::Player);
        board
    }

    /// Place a piece on its `position`; `None` if the cell is taken.
    pub fn add_piece(&mut self, mut piece: ShadowPiece) -> Option<PieceId> {
        let pos = piece.position;
        if self.cell(pos).is_some() {
            debug!("cannot add piece at {}: cell occupied", pos);
            return None;
        }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        piece.id = id;
        self.grid[pos.y as usize][pos.x as usize] = Some(id);
        self.pieces.insert(id, piece);
        Some(id)
    }

    /// Take a piece off the board (setup only; combat removes through
    /// `move_or_attack`).
    pub fn remove_piece(&mut self, id: PieceId) -> Option<ShadowPiece> {
        let piece = self.pieces.remove(&id)?;
        self.grid[piece.position.y as usize][piece.position.x as usize] = None;
        Some(piece)
    }

    pub fn add_hook(&mut self, hook: Box<dyn MoveHook>) {
        self.hooks.push(hook);
    }

    fn cell(&self, pos: Position) -> Option<PieceId> {
        self.grid[pos.y as usize][pos.x as usize]
    }

    fn at(&self, pos: Position) -> Option<&ShadowPiece> {
        self.cell(pos).and_then(|id| self.pieces.get(&id))
    }

    /// Piece on (x, y); `None` when empty or off the board.
    pub fn piece_at(&self, x: i32, y: i32) -> Option<&ShadowPiece> {
        if !(0..BOARD_SIZE as i32).contains(&x) || !(0..BOARD_SIZE as i32).contains(&y) {
            return None;
        }
        self.at(Position {
            x: x as u8,
            y: y as u8,
        })
    }

    pub fn piece(&self, id: PieceId) -> Option<&ShadowPiece> {
        self.pieces.get(&id)
    }

    /// Live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &ShadowPiece> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, team: Team) -> Vec<&ShadowPiece> {
        self.pieces.values().filter(|p| p.team == team).collect()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn candidate_moves(&self, id: PieceId) -> Vec<Position> {
        match self.pieces.get(&id) {
            Some(piece) => candidate_moves(self, &piece.mover()),
            None => Vec::new(),
        }
    }

    /// Move onto an empty cell or attack an enemy occupant. Geometry is the
    /// caller's business; this only resolves what happens at `to`.
    pub fn move_or_attack(&mut self, id: PieceId, to: Position) -> MoveOutcome {
        let Some(attacker) = self.pieces.get(&id) else {
            return MoveOutcome::Blocked;
        };
        let (team, damage, from) = (attacker.team, attacker.damage, attacker.position);

        match self.cell(to) {
            None => {
                self.relocate(id, to);
                self.run_hooks(id, from);
                MoveOutcome::Moved { from, to }
            }
            Some(target_id) if target_id == id => MoveOutcome::Blocked,
            Some(target_id) => {
                let Some(target) = self.pieces.get_mut(&target_id) else {
                    return MoveOutcome::Blocked;
                };
                if target.team == team {
                    return MoveOutcome::Blocked;
                }
                if !target.take_hit(damage) {
                    debug!(
                        "{} at {} takes {} damage, {} hp left",
                        target.display_name(),
                        to,
                        damage,
                        target.hp
                    );
                    return MoveOutcome::Struck {
                        target: target_id,
                        remaining_hp: target.hp,
                    };
                }
                let Some(victim) = self.remove_piece(target_id) else {
                    return MoveOutcome::Blocked;
                };
                info!("{} at {} falls", victim.display_name(), to);
                self.relocate(id, to);
                self.run_hooks(id, from);
                MoveOutcome::Killed { from, to, victim }
            }
        }
    }

    fn relocate(&mut self, id: PieceId, to: Position) {
        let Some(piece) = self.pieces.get_mut(&id) else {
            return;
        };
        let from = piece.position;
        piece.position = to;
        piece.moves_made += 1;
        self.grid[from.y as usize][from.x as usize] = None;
        self.grid[to.y as usize][to.x as usize] = Some(id);
    }

    fn run_hooks(&mut self, id: PieceId, from: Position) {
        if self.hooks.is_empty() {
            return;
        }
        let mut hooks = std::mem::take(&mut self.hooks);
        for hook in hooks.iter_mut() {
            hook.after_move(self, id, from);
        }
        hooks.append(&mut self.hooks);
        self.hooks = hooks;
    }

    // Fog of war --------------------------------------------------------

    /// Recompute `team`'s fog from scratch: everything hidden, then a 3x3
    /// block cleared around each live piece of the team.
    pub fn refresh_fog(&mut self, team: Team) -> &FogGrid {
        let mut fog = [[true; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for piece in self.pieces.values().filter(|p| p.team == team) {
            for cell in piece.position.block3x3() {
                fog[cell.y as usize][cell.x as usize] = false;
            }
        }
        self.fog[team.index()] = fog;
        &self.fog[team.index()]
    }

    pub fn is_visible(&mut self, pos: Position, team: Team) -> bool {
        let fog = self.refresh_fog(team);
        !fog[pos.y as usize][pos.x as usize]
    }

    /// Fog as of the last refresh for `team`.
    pub fn fog(&self, team: Team) -> &FogGrid {
        &self.fog[team.index()]
    }

    // Win conditions ----------------------------------------------------

    pub fn boss(&self) -> Option<&ShadowPiece> {
        self.pieces.values().find(|p| p.team == Team::Enemy && p.is_boss)
    }

    pub fn player_king(&self) -> Option<&ShadowPiece> {
        self.pieces
            .values()
            .find(|p| p.team == Team::Player && p.kind == PieceKind::King)
    }

    pub fn boss_dead(&self) -> bool {
        self.boss().is_none()
    }

    pub fn player_dead(&self) -> bool {
        self.player_king().is_none()
    }

    /// Grid and piece collection describe the same placement.
    pub fn is_consistent(&self) -> bool {
        let placed = Position::all().filter(|&p| self.cell(p).is_some()).count();
        placed == self.pieces.len()
            && self
                .pieces
                .iter()
                .all(|(id, p)| p.id == *id && self.cell(p.position) == Some(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn standard_layout() {
        let board = ShadowBoard::standard();
        assert_eq!(board.piece_count(), 32);
        assert!(board.is_consistent());
        let boss = board.boss().unwrap();
        assert_eq!(boss.position, pos(4, 0));
        assert_eq!(board.player_king().unwrap().position, pos(4, 7));
        assert_eq!(board.pieces_of(Team::Player).len(), 16);
    }

    #[test]
    fn add_piece_refuses_occupied_cell() {
        let mut board = ShadowBoard::standard();
        let extra = ShadowPiece::new(PieceKind::Pawn, Team::Enemy, pos(0, 0));
        assert_eq!(board.add_piece(extra), None);
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn piece_at_is_bounds_checked() {
        let board = ShadowBoard::standard();
        assert!(board.piece_at(-1, 0).is_none());
        assert!(board.piece_at(0, 8).is_none());
        assert!(board.piece_at(0, 7).is_some());
    }

    #[test]
    fn player_pawns_advance_up_the_grid() {
        let board = ShadowBoard::standard();
        let pawn = board.piece_at(4, 6).unwrap();
        assert_eq!(board.candidate_moves(pawn.id), vec![pos(4, 5), pos(4, 4)]);
        let enemy = board.piece_at(4, 1).unwrap();
        assert_eq!(board.candidate_moves(enemy.id), vec![pos(4, 2), pos(4, 3)]);
    }

    #[test]
    fn friendly_target_is_blocked() {
        let mut board = ShadowBoard::standard();
        let rook = board.piece_at(0, 7).unwrap().id;
        assert_eq!(board.move_or_attack(rook, pos(0, 6)), MoveOutcome::Blocked);
        assert!(board.is_consistent());
    }

    #[test]
    fn hooks_fire_on_relocation_only() {
        let mut board = ShadowBoard::new();
        let boss = board.add_piece(ShadowPiece::boss(pos(3, 3))).unwrap();
        board.add_piece(ShadowPiece::new(PieceKind::Queen, Team::Player, pos(3, 4)));
        board.add_hook(Box::new(ShadowTrail));

        // hit without a kill: no trail
        assert!(matches!(board.move_or_attack(boss, pos(3, 4)), MoveOutcome::Struck { .. }));
        assert_eq!(board.piece_count(), 2);

        // plain move: a shadow appears where the boss stood
        assert_eq!(
            board.move_or_attack(boss, pos(2, 2)),
            MoveOutcome::Moved { from: pos(3, 3), to: pos(2, 2) }
        );
        assert_eq!(board.piece_count(), 3);
        let shadow = board.piece_at(3, 3).unwrap();
        assert_eq!((shadow.kind, shadow.team), (PieceKind::Pawn, Team::Enemy));
        assert!(board.is_consistent());
    }
}
