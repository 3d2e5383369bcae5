//! Game pieces.

use serde::{Deserialize, Serialize};

use super::orientation::{Category, Orientation};
use super::position::Position;
use crate::error::ConstructionError;

/// A piece on the board.
///
/// Name and orientation are fixed at creation; only the board can move a
/// piece, and only by changing its position. Deserialization goes through
/// `Piece::new`, so the orientation always matches the name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PieceRecord")]
pub struct Piece {
    name: String,
    orientation: Orientation,
    position: Position,
}

impl Piece {
    /// Create a piece, deriving its orientation from `name`.
    ///
    /// Fails with `UnknownPieceName` if the name matches no orientation.
    ///
    /// ```
    /// use mirror_puzzle::core::{Orientation, Piece, Position, Quadrant};
    ///
    /// let piece = Piece::new("Q2", (3, 0)).unwrap();
    /// assert_eq!(piece.orientation(), Orientation::Player(Quadrant::Q2));
    /// assert_eq!(piece.position(), Position::new(3, 0));
    /// assert!(Piece::new("Z", (0, 0)).is_err());
    /// ```
    pub fn new(name: impl Into<String>, position: impl Into<Position>) -> Result<Self, ConstructionError> {
        let name = name.into();
        let orientation =
            Orientation::from_name(&name).ok_or_else(|| ConstructionError::UnknownPieceName(name.clone()))?;
        Ok(Self {
            name,
            orientation,
            position: position.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.orientation.category()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// Serialized form of a `Piece`. A stored orientation is optional but must
/// agree with the name.
#[derive(Deserialize)]
struct PieceRecord {
    name: String,
    #[serde(default)]
    orientation: Option<Orientation>,
    position: Position,
}

impl TryFrom<PieceRecord> for Piece {
    type Error = ConstructionError;

    fn try_from(record: PieceRecord) -> Result<Self, Self::Error> {
        let piece = Piece::new(record.name, record.position)?;
        match record.orientation {
            Some(orientation) if orientation != piece.orientation => Err(ConstructionError::MismatchedOrientation {
                name: piece.name,
                orientation,
            }),
            _ => Ok(piece),
        }
    }
}
