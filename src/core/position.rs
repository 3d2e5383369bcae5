//! Board coordinates and beam directions.
//!
//! ## Position
//!
//! `(row, col)` pair, both unsigned. Row 0 is the top of the board and
//! column 0 the left edge, so the beam's entry cell on a board of side `n`
//! is `(n - 1, 0)`.
//!
//! ## Direction
//!
//! The four axis-aligned directions a beam can travel. Stepping is always
//! bounded by the board size; a step that would leave the board yields `None`.

use serde::{Deserialize, Serialize};

/// A cell on the square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Check if this position lies on a board of side `size`.
    #[must_use]
    pub const fn in_bounds(self, size: u32) -> bool {
        self.row < size && self.col < size
    }

    /// The neighbouring cell in `direction`, if it is on the board.
    ///
    /// ```
    /// use mirror_puzzle::core::{Direction, Position};
    ///
    /// let corner = Position::new(3, 0);
    /// assert_eq!(corner.step(Direction::Up, 4), Some(Position::new(2, 0)));
    /// assert_eq!(corner.step(Direction::Left, 4), None);
    /// assert_eq!(corner.step(Direction::Down, 4), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, size: u32) -> Option<Position> {
        let (dy, dx) = direction.delta();
        self.offset(dy, dx, size)
    }

    /// Offset by `(dy, dx)` rows/columns, if the result is on the board.
    #[must_use]
    pub fn offset(self, dy: i64, dx: i64, size: u32) -> Option<Position> {
        let row = i64::from(self.row) + dy;
        let col = i64::from(self.col) + dx;
        let size = i64::from(size);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            // Both fit in u32 since they are below `size`.
            Some(Position::new(row as u32, col as u32))
        } else {
            None
        }
    }

    /// Signed `(dy, dx)` from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Position) -> (i64, i64) {
        (
            i64::from(other.row) - i64::from(self.row),
            i64::from(other.col) - i64::from(self.col),
        )
    }
}

impl From<(u32, u32)> for Position {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Direction of beam travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column delta of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
