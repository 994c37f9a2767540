pub mod board;
pub mod bridge;
pub mod console;
pub mod coord;
pub mod movegen;
pub mod notation;
pub mod piece;
pub mod shadows;

pub use board::{Board, Status};
pub use coord::Position;
pub use piece::{Color, Piece, PieceKind};
