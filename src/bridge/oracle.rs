//! Independent rules oracle backed by shakmaty.
//!
//! Positions reach shakmaty through `to_fen`, so this also exercises the
//! notation boundary. Only the rules the core implements can agree: the
//! exported FEN never grants castling or en passant.

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, File, Position as _, Rank, Square};

use super::BridgeError;
use crate::board::Board;
use crate::coord::Position;
use crate::notation::to_fen_as;
use crate::piece::Color;

pub struct RulesOracle;

impl RulesOracle {
    fn position(board: &Board, turn: Color) -> Result<Chess, BridgeError> {
        let fen = to_fen_as(board, turn)
            .parse::<Fen>()
            .map_err(|e| BridgeError::InvalidFen(e.to_string()))?;
        fen.into_position(CastlingMode::Standard)
            .map_err(|e| BridgeError::InvalidPosition(e.to_string()))
    }

    pub fn square(pos: Position) -> Square {
        Square::from_coords(File::new(pos.x as u32), Rank::new(pos.y as u32))
    }

    /// Whether the side on move may play `from -> to` under full chess rules.
    pub fn is_legal(board: &Board, from: Position, to: Position) -> Result<bool, BridgeError> {
        let pos = Self::position(board, board.turn())?;
        let (from, to) = (Self::square(from), Self::square(to));
        Ok(pos
            .legal_moves()
            .iter()
            .any(|m| m.from() == Some(from) && m.to() == to))
    }

    pub fn is_check(board: &Board, color: Color) -> Result<bool, BridgeError> {
        Ok(Self::position(board, color)?.is_check())
    }

    pub fn is_checkmate(board: &Board, color: Color) -> Result<bool, BridgeError> {
        Ok(Self::position(board, color)?.is_checkmate())
    }

    /// Number of legal moves for the side on move.
    pub fn legal_move_count(board: &Board) -> Result<usize, BridgeError> {
        Ok(Self::position(board, board.turn())?.legal_moves().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_square;

    #[test]
    fn opening_moves_agree_with_core() {
        let board = Board::new();
        assert_eq!(RulesOracle::legal_move_count(&board).unwrap(), 20);
        let e2 = parse_square("e2").unwrap();
        let e4 = parse_square("e4").unwrap();
        let e5 = parse_square("e5").unwrap();
        assert!(RulesOracle::is_legal(&board, e2, e4).unwrap());
        assert!(!RulesOracle::is_legal(&board, e2, e5).unwrap());
    }

    #[test]
    fn square_mapping_uses_rank_minus_one() {
        let e2 = parse_square("e2").unwrap();
        assert_eq!(RulesOracle::square(e2), Square::E2);
    }
}
