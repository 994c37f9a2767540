//! Standard notation at the bridge boundary.
//!
//! Internally y = rank - 1 and x = file index, so "e2" is (4, 1). This is the
//! only module that names squares; the flip to a top-down rendering happens
//! in the presenters.

use thiserror::Error;

use crate::board::Board;
use crate::coord::Position;
use crate::piece::{Color, Piece, PieceKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),
    #[error("move too short: {0}")]
    MoveTooShort(String),
    #[error("invalid move notation: {0}")]
    InvalidMove(String),
    #[error("invalid FEN: {0}")]
    InvalidFen(&'static str),
}

/// Convert a position to algebraic notation (e.g. (4, 1) -> "e2").
pub fn square_name(pos: Position) -> String {
    let file_char = (b'a' + pos.x) as char;
    let rank_char = (b'1' + pos.y) as char;
    format!("{}{}", file_char, rank_char)
}

/// Convert algebraic notation to a position (e.g. "e2" -> (4, 1)).
pub fn parse_square(s: &str) -> Result<Position, NotationError> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(s.to_string()));
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(s.to_string()));
    }
    Position::new(file - b'a', rank - b'1')
        .ok_or_else(|| NotationError::InvalidSquare(s.to_string()))
}

/// Parse a long algebraic move ("e2e4") into (origin, destination).
/// Anything after the fourth character (a promotion letter) is ignored.
pub fn parse_lan(lan: &str) -> Result<(Position, Position), NotationError> {
    let lan = lan.trim();
    if !lan.is_ascii() {
        return Err(NotationError::InvalidMove(lan.to_string()));
    }
    if lan.len() < 4 {
        return Err(NotationError::MoveTooShort(lan.to_string()));
    }
    let from = parse_square(&lan[0..2])?;
    let to = parse_square(&lan[2..4])?;
    Ok((from, to))
}

pub fn move_to_lan(from: Position, to: Position) -> String {
    format!("{}{}", square_name(from), square_name(to))
}

/// Placement and side to move; castling, en passant and counters are
/// always "- - 0 1".
pub fn to_fen(board: &Board) -> String {
    to_fen_as(board, board.turn())
}

/// Same as `to_fen` with the active colour overridden, for oracle queries
/// about the side that is not on move.
pub fn to_fen_as(board: &Board, turn: Color) -> String {
    let mut rows = Vec::with_capacity(8);
    for y in (0..8u8).rev() {
        let mut row = String::new();
        let mut empty = 0;
        for x in 0..8u8 {
            match board.piece_at(Position { x, y }) {
                None => empty += 1,
                Some(piece) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.symbol());
                }
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        rows.push(row);
    }
    let side = match turn {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {} - - 0 1", rows.join("/"), side)
}

/// Build a board from the first two FEN fields. Later fields are accepted
/// and ignored. Pawns away from their home row count as already moved.
pub fn board_from_fen(fen: &str) -> Result<Board, NotationError> {
    let mut parts = fen.split_whitespace();
    let piece_part = parts.next().ok_or(NotationError::InvalidFen("missing pieces"))?;
    let side_part = parts.next().unwrap_or("w");

    let turn = match side_part {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(NotationError::InvalidFen("invalid side char")),
    };
    let mut board = Board::empty(turn);

    let rows: Vec<&str> = piece_part.split('/').collect();
    if rows.len() != 8 {
        return Err(NotationError::InvalidFen("expected 8 ranks"));
    }
    // Parse pieces: rank8 .. rank1
    for (i, row) in rows.iter().enumerate() {
        let y = 7 - i as u8;
        let mut x = 0u8;
        for ch in row.chars() {
            if let Some(skip) = ch.to_digit(10) {
                x += skip as u8;
            } else {
                let kind = PieceKind::from_letter(ch)
                    .ok_or(NotationError::InvalidFen("invalid piece char"))?;
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let pos = Position::new(x, y).ok_or(NotationError::InvalidFen("rank too long"))?;
                let mut piece = Piece::new(color, kind, pos);
                let home = match color {
                    Color::White => 1,
                    Color::Black => 6,
                };
                if kind == PieceKind::Pawn && y != home {
                    piece.move_count = 1;
                }
                board.place(piece);
                x += 1;
            }
            if x > 8 {
                return Err(NotationError::InvalidFen("rank too long"));
            }
        }
        if x != 8 {
            return Err(NotationError::InvalidFen("rank too short"));
        }
    }
    Ok(board)
}

impl Board {
    /// Apply a long algebraic move through the normal legality gate.
    pub fn apply_lan(&mut self, lan: &str) -> bool {
        match parse_lan(lan) {
            Ok((from, to)) => self.attempt_move(from, to),
            Err(e) => {
                log::debug!("rejected {:?}: {}", lan, e);
                false
            }
        }
    }
}
