// Classical board: sparse position map, turn, status and move history.
// Coordinates follow crate::coord (White starts on y=0/1).

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coord::Position;
use crate::movegen::{candidate_moves, Mover, SquareView};
use crate::piece::{Color, Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

pub type MoveRecord = (Position, Position);

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

// Undo entry per rollback
#[derive(Debug)]
struct Undo {
    from: Position,
    to: Position,
    captured: Option<Piece>,
    prev_move_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: HashMap<Position, Piece>,
    turn: Color,
    status: Status,
    history: Vec<MoveRecord>,
}

impl SquareView for Board {
    type Side = Color;

    fn side_at(&self, pos: Position) -> Option<Color> {
        self.squares.get(&pos).map(|p| p.color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening layout, White to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Color::White);
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            let x = x as u8;
            board.put(Color::White, kind, x, 0);
            board.put(Color::White, PieceKind::Pawn, x, 1);
            board.put(Color::Black, PieceKind::Pawn, x, 6);
            board.put(Color::Black, kind, x, 7);
        }
        board
    }

    /// Board with no pieces; positions are then built with `place`.
    pub fn empty(turn: Color) -> Self {
        Self {
            squares: HashMap::with_capacity(32),
            turn,
            status: Status::Playing,
            history: Vec::new(),
        }
    }

    fn put(&mut self, color: Color, kind: PieceKind, x: u8, y: u8) {
        let pos = Position { x, y };
        self.squares.insert(pos, Piece::new(color, kind, pos));
    }

    // Setup helpers. Move logic never adds or removes pieces except by capture.

    /// Put a piece on its own `position`, replacing any occupant.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.squares.insert(piece.position, piece)
    }

    // Queries ---------------------------------------------------------

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.squares.get(&pos)
    }

    /// All pieces ordered by (y, x).
    pub fn pieces(&self) -> Vec<&Piece> {
        let mut out: Vec<&Piece> = self.squares.values().collect();
        out.sort_by_key(|p| (p.position.y, p.position.x));
        out
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.squares
            .values()
            .find(|p| p.color == color && p.kind == PieceKind::King)
            .map(|p| p.position)
    }

    /// Candidate moves of the piece on `pos`, before check filtering.
    pub fn valid_moves(&self, pos: Position) -> Vec<Position> {
        match self.squares.get(&pos) {
            Some(piece) => self.piece_moves(piece),
            None => Vec::new(),
        }
    }

    fn piece_moves(&self, piece: &Piece) -> Vec<Position> {
        let mover = Mover {
            kind: piece.kind,
            side: piece.color,
            origin: piece.position,
            forward: piece.color.forward(),
            unmoved: piece.move_count == 0,
        };
        candidate_moves(self, &mover)
    }

    fn positions_of(&self, color: Color) -> Vec<Position> {
        let mut out: Vec<Position> = self
            .squares
            .values()
            .filter(|p| p.color == color)
            .map(|p| p.position)
            .collect();
        out.sort_by_key(|p| (p.y, p.x));
        out
    }

    /// True iff some enemy candidate move lands on `color`'s king.
    /// A missing king counts as not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_position(color) else {
            return false;
        };
        self.squares
            .values()
            .filter(|p| p.color != color)
            .any(|p| self.piece_moves(p).contains(&king))
    }

    /// Check with no candidate move, over all own pieces, that lifts it.
    /// Every candidate is simulated on this board and rolled back.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        !self.has_escape(color)
    }

    /// Not in check and no move that keeps the king safe. Query only:
    /// `attempt_move` never sets `Status::Stalemate`.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_escape(color)
    }

    fn has_escape(&mut self, color: Color) -> bool {
        for from in self.positions_of(color) {
            for to in self.valid_moves(from) {
                if self.keeps_king_safe(from, to) {
                    return true;
                }
            }
        }
        false
    }

    fn keeps_king_safe(&mut self, from: Position, to: Position) -> bool {
        let Some(color) = self.side_at(from) else {
            return false;
        };
        match Tentative::apply(self, from, to) {
            Some(sim) => !sim.board().is_in_check(color),
            None => false,
        }
    }

    /// Candidate moves of the piece on `pos` that do not expose its king.
    pub fn legal_moves(&mut self, pos: Position) -> Vec<Position> {
        self.valid_moves(pos)
            .into_iter()
            .filter(|&to| self.keeps_king_safe(pos, to))
            .collect()
    }

    /// Every legal (origin, destination) pair for `color`.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<MoveRecord> {
        let mut out = Vec::new();
        for from in self.positions_of(color) {
            for to in self.legal_moves(from) {
                out.push((from, to));
            }
        }
        out
    }

    // Mutation --------------------------------------------------------

    /// The single mutating entry point. On failure the board is unchanged.
    pub fn attempt_move(&mut self, from: Position, to: Position) -> bool {
        let Some(piece) = self.squares.get(&from) else {
            debug!("rejected {} -> {}: origin empty", from, to);
            return false;
        };
        let mover = piece.color;
        if mover != self.turn {
            debug!("rejected {} -> {}: not {}'s turn", from, to, mover);
            return false;
        }
        if !self.piece_moves(piece).contains(&to) {
            debug!("rejected {} -> {}: not a candidate move", from, to);
            return false;
        }

        let Some(sim) = Tentative::apply(self, from, to) else {
            return false;
        };
        if sim.board().is_in_check(mover) {
            debug!("rejected {} -> {}: leaves {} king in check", from, to, mover);
            return false;
        }
        sim.commit();

        self.history.push((from, to));
        let opponent = mover.opponent();
        self.turn = opponent;
        self.status = if self.is_in_check(opponent) {
            if self.is_checkmate(opponent) {
                Status::Checkmate
            } else {
                Status::Check
            }
        } else {
            Status::Playing
        };
        debug!("{} -> {} played, {} to move, {:?}", from, to, opponent, self.status);
        true
    }

    fn make_move(&mut self, from: Position, to: Position) -> Option<Undo> {
        let mut piece = self.squares.remove(&from)?;
        let prev_move_count = piece.move_count;
        piece.position = to;
        piece.move_count += 1;
        let captured = self.squares.insert(to, piece);
        Some(Undo {
            from,
            to,
            captured,
            prev_move_count,
        })
    }

    fn unmake_move(&mut self, undo: Undo) {
        if let Some(mut piece) = self.squares.remove(&undo.to) {
            piece.position = undo.from;
            piece.move_count = undo.prev_move_count;
            self.squares.insert(undo.from, piece);
        }
        if let Some(captured) = undo.captured {
            self.squares.insert(undo.to, captured);
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pieces: self.pieces().into_iter().cloned().collect(),
            turn: self.turn,
            status: self.status,
            history: self.history.clone(),
        }
    }
}

/// A move applied to the board for as long as this value lives.
///
/// Dropping it restores the board exactly, including on unwind; `commit`
/// keeps the move.
struct Tentative<'a> {
    board: &'a mut Board,
    undo: Option<Undo>,
}

impl<'a> Tentative<'a> {
    fn apply(board: &'a mut Board, from: Position, to: Position) -> Option<Self> {
        let undo = board.make_move(from, to)?;
        Some(Self {
            board,
            undo: Some(undo),
        })
    }

    fn board(&self) -> &Board {
        &*self.board
    }

    fn commit(mut self) {
        self.undo = None;
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.unmake_move(undo);
        }
    }
}

/// Read-only view handed to rendering and notation collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pieces: Vec<Piece>,
    pub turn: Color,
    pub status: Status,
    pub history: Vec<MoveRecord>,
}

// Simple display, rank 8 on top
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..8u8).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..8u8 {
                match self.squares.get(&Position { x, y }) {
                    Some(p) => write!(f, "{} ", p.symbol())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
