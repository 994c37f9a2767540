// Board coordinates and step tables shared by both variants.
//
// (0,0) is the top-left cell of the rendered grid; y grows downward. On the
// classical board White starts on y=0/1, so y is also "rank - 1" once the
// notation layer names squares.

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: u8 = 8;

// Direction deltas for sliding moves
pub const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Checked constructor; `None` outside the 8x8 grid.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Step by a delta, clipped to the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let nx = self.x as i8 + dx;
        let ny = self.y as i8 + dy;
        if (0..BOARD_SIZE as i8).contains(&nx) && (0..BOARD_SIZE as i8).contains(&ny) {
            Some(Self {
                x: nx as u8,
                y: ny as u8,
            })
        } else {
            None
        }
    }

    pub fn manhattan(self, other: Position) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u32
    }

    pub fn chebyshev(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y)) as u32
    }

    /// Neighbours within Chebyshev distance 1, including the cell itself.
    pub fn block3x3(self) -> impl Iterator<Item = Position> {
        (-1i8..=1)
            .flat_map(|dy| (-1i8..=1).map(move |dx| (dx, dy)))
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Every cell of the board, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position { x, y }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
