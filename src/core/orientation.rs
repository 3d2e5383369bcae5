//! Piece orientations, categories and the fixed pairing tables.
//!
//! ## Quadrants
//!
//! Mirrors are named after the cartesian quadrant their reflective normal
//! points into:
//!
//! ```text
//!   Q2 | Q1        Q1: up-right     Q2: up-left
//!   ---+---        Q3: down-left    Q4: down-right
//!   Q3 | Q4
//! ```
//!
//! ## Names
//!
//! | Name         | Orientation            |
//! |--------------|------------------------|
//! | `Q1`..`Q4`   | player mirror          |
//! | `q1`..`q4`   | computer mirror        |
//! | `X...`       | inert blocker          |
//! | `s...`       | sink                   |
//!
//! Every player quadrant is paired with the computer quadrant of the same
//! number (`Q1` <-> `q1`, ...).

use serde::{Deserialize, Serialize};

use super::position::Direction;

/// Quadrant of a mirror's reflective normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quadrant {
    /// Iterate over all four quadrants.
    pub fn all() -> impl Iterator<Item = Quadrant> {
        [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4].into_iter()
    }

    /// Outgoing direction for a beam arriving with `incoming`, or `None`
    /// if the beam hits the back of the mirror.
    ///
    /// ```
    /// use mirror_puzzle::core::{Direction, Quadrant};
    ///
    /// assert_eq!(Quadrant::Q2.reflect(Direction::Right), Some(Direction::Up));
    /// assert_eq!(Quadrant::Q2.reflect(Direction::Left), None);
    /// ```
    #[must_use]
    pub const fn reflect(self, incoming: Direction) -> Option<Direction> {
        match (self, incoming) {
            (Quadrant::Q1, Direction::Left) => Some(Direction::Up),
            (Quadrant::Q1, Direction::Down) => Some(Direction::Right),
            (Quadrant::Q2, Direction::Right) => Some(Direction::Up),
            (Quadrant::Q2, Direction::Down) => Some(Direction::Left),
            (Quadrant::Q3, Direction::Right) => Some(Direction::Down),
            (Quadrant::Q3, Direction::Up) => Some(Direction::Left),
            (Quadrant::Q4, Direction::Left) => Some(Direction::Down),
            (Quadrant::Q4, Direction::Up) => Some(Direction::Right),
            _ => None,
        }
    }

    const fn digit(self) -> char {
        match self {
            Quadrant::Q1 => '1',
            Quadrant::Q2 => '2',
            Quadrant::Q3 => '3',
            Quadrant::Q4 => '4',
        }
    }

    const fn from_digit(digit: u8) -> Option<Quadrant> {
        match digit {
            b'1' => Some(Quadrant::Q1),
            b'2' => Some(Quadrant::Q2),
            b'3' => Some(Quadrant::Q3),
            b'4' => Some(Quadrant::Q4),
            _ => None,
        }
    }
}

/// Role of a piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Player,
    Computer,
    Inert,
    Sink,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Player => "player",
            Category::Computer => "computer",
            Category::Inert => "inert",
            Category::Sink => "sink",
        };
        f.write_str(name)
    }
}

/// Orientation tag of a piece. Fixes both its role and how it reflects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Player(Quadrant),
    Computer(Quadrant),
    Sink,
    Inert,
}

impl Orientation {
    /// Look up the orientation for a piece name.
    ///
    /// Mirror names must match exactly; inert and sink names are recognised
    /// by their first character so several of each can be told apart.
    ///
    /// ```
    /// use mirror_puzzle::core::{Orientation, Quadrant};
    ///
    /// assert_eq!(Orientation::from_name("Q3"), Some(Orientation::Player(Quadrant::Q3)));
    /// assert_eq!(Orientation::from_name("q1"), Some(Orientation::Computer(Quadrant::Q1)));
    /// assert_eq!(Orientation::from_name("X2"), Some(Orientation::Inert));
    /// assert_eq!(Orientation::from_name("s"), Some(Orientation::Sink));
    /// assert_eq!(Orientation::from_name("Q5"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Orientation> {
        match name.as_bytes() {
            [b'Q', digit] => Quadrant::from_digit(*digit).map(Orientation::Player),
            [b'q', digit] => Quadrant::from_digit(*digit).map(Orientation::Computer),
            [b'X', ..] => Some(Orientation::Inert),
            [b's', ..] => Some(Orientation::Sink),
            _ => None,
        }
    }

    /// Canonical name of a mirror orientation (`Q1`, `q3`, ...).
    ///
    /// Inert pieces and sinks carry their own names, so this returns `None`
    /// for them.
    #[must_use]
    pub fn mirror_name(self) -> Option<String> {
        match self {
            Orientation::Player(q) => Some(format!("Q{}", q.digit())),
            Orientation::Computer(q) => Some(format!("q{}", q.digit())),
            Orientation::Sink | Orientation::Inert => None,
        }
    }

    /// The category this orientation belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Orientation::Player(_) => Category::Player,
            Orientation::Computer(_) => Category::Computer,
            Orientation::Inert => Category::Inert,
            Orientation::Sink => Category::Sink,
        }
    }

    /// The mirror quadrant, if this is a mirror.
    #[must_use]
    pub const fn quadrant(self) -> Option<Quadrant> {
        match self {
            Orientation::Player(q) | Orientation::Computer(q) => Some(q),
            Orientation::Sink | Orientation::Inert => None,
        }
    }

    /// The rigidly paired orientation (`Q1` <-> `q1`, ...).
    #[must_use]
    pub const fn paired(self) -> Option<Orientation> {
        match self {
            Orientation::Player(q) => Some(Orientation::Computer(q)),
            Orientation::Computer(q) => Some(Orientation::Player(q)),
            Orientation::Sink | Orientation::Inert => None,
        }
    }
}
