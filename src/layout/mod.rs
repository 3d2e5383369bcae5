//! Piece layouts: the four placement lists a board is built from.
//!
//! A `PieceLayout` holds unresolved `(name, position)` placements. Names are
//! resolved to orientations only when the layout becomes a board, so an
//! unknown name is reported as a `ConstructionError` like every other
//! layout problem.
//!
//! ## Usage
//!
//! ```
//! use mirror_puzzle::layout::PieceLayout;
//!
//! let board = PieceLayout::new(2)
//!     .with_player("Q2", (1, 1))
//!     .with_computer("q2", (0, 0))
//!     .with_sink("s", (0, 1))
//!     .build()
//!     .unwrap();
//! assert!(board.check_puzzle_completion());
//! ```
//!
//! Layouts are also read from text; see `parser`.

pub mod parser;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Category, Piece, Position};
use crate::error::ConstructionError;

/// A named piece at a position, not yet validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub position: Position,
}

impl Placement {
    pub fn new(name: impl Into<String>, position: impl Into<Position>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }

    fn resolve(&self) -> Result<Piece, ConstructionError> {
        Piece::new(self.name.clone(), self.position)
    }
}

/// Board size plus the four placement lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceLayout {
    pub size: u32,
    pub player: Vec<Placement>,
    pub computer: Vec<Placement>,
    pub inert: Vec<Placement>,
    pub sinks: Vec<Placement>,
}

impl PieceLayout {
    /// Create an empty layout for a board of side `size`.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, position: impl Into<Position>) -> Self {
        self.player.push(Placement::new(name, position));
        self
    }

    #[must_use]
    pub fn with_computer(mut self, name: impl Into<String>, position: impl Into<Position>) -> Self {
        self.computer.push(Placement::new(name, position));
        self
    }

    #[must_use]
    pub fn with_inert(mut self, name: impl Into<String>, position: impl Into<Position>) -> Self {
        self.inert.push(Placement::new(name, position));
        self
    }

    #[must_use]
    pub fn with_sink(mut self, name: impl Into<String>, position: impl Into<Position>) -> Self {
        self.sinks.push(Placement::new(name, position));
        self
    }

    /// Total number of placements.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.player.len() + self.computer.len() + self.inert.len() + self.sinks.len()
    }

    /// Validate the layout into a board.
    pub fn build(&self) -> Result<Board, ConstructionError> {
        Board::from_layout(self)
    }
}

fn resolve_all(placements: &[Placement]) -> Result<Vec<Piece>, ConstructionError> {
    placements.iter().map(Placement::resolve).collect()
}

impl Board {
    /// Build a board from a layout.
    pub fn from_layout(layout: &PieceLayout) -> Result<Self, ConstructionError> {
        Board::new(
            layout.size,
            resolve_all(&layout.player)?,
            resolve_all(&layout.computer)?,
            resolve_all(&layout.inert)?,
            resolve_all(&layout.sinks)?,
        )
    }

    /// Build a board from a text layout file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConstructionError> {
        Board::from_layout(&PieceLayout::from_path(path)?)
    }

    /// Snapshot of the current piece positions.
    ///
    /// Building the snapshot yields a board equal to this one.
    #[must_use]
    pub fn layout(&self) -> PieceLayout {
        let mut pieces: Vec<&Piece> = self.pieces().collect();
        pieces.sort_by(|a, b| a.name().cmp(b.name()));

        let mut layout = PieceLayout::new(self.size());
        for piece in pieces {
            let placement = Placement::new(piece.name(), piece.position());
            match piece.category() {
                Category::Player => layout.player.push(placement),
                Category::Computer => layout.computer.push(placement),
                Category::Inert => layout.inert.push(placement),
                Category::Sink => layout.sinks.push(placement),
            }
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Quadrant;

    fn fixture() -> PieceLayout {
        PieceLayout::new(4)
            .with_player("Q1", (3, 0))
            .with_player("Q4", (3, 1))
            .with_computer("q1", (0, 0))
            .with_computer("q4", (0, 1))
            .with_inert("X", (1, 1))
            .with_sink("s", (2, 2))
    }

    #[test]
    fn test_builder_collects_placements() {
        let layout = fixture();
        assert_eq!(layout.size, 4);
        assert_eq!(layout.player.len(), 2);
        assert_eq!(layout.piece_count(), 6);
        assert_eq!(layout.inert[0], Placement::new("X", (1, 1)));
    }

    #[test]
    fn test_build_board() {
        let board = fixture().build().unwrap();
        assert_eq!(board.num_player_pieces(), 2);
        assert_eq!(board.player_piece(Quadrant::Q4).unwrap().position(), Position::new(3, 1));
    }

    #[test]
    fn test_unknown_name_fails_construction() {
        let err = fixture().with_inert("Y", (2, 0)).build().unwrap_err();
        assert!(matches!(err, ConstructionError::UnknownPieceName(ref n) if n == "Y"));
    }

    #[test]
    fn test_snapshot_rebuilds_same_board() {
        let mut board = fixture().build().unwrap();
        board.player_move("Q1", Position::new(2, 0)).unwrap();
        let snapshot = board.layout();
        assert_eq!(snapshot.player[0], Placement::new("Q1", (2, 0)));
        assert_eq!(snapshot.computer[0], Placement::new("q1", (1, 0)));
        assert_eq!(snapshot.build().unwrap(), board);
    }
}
