//! The puzzle board: sole owner of every piece.
//!
//! ## Invariants
//!
//! Checked at construction and preserved by every move:
//! - `size > 0` and every piece lies inside `[0, size)` on both axes
//! - `occupied` maps exactly the cells holding a piece, one piece per cell
//! - one player piece per quadrant used, and every computer piece has the
//!   player piece of its quadrant (equal counts, total pairing)
//! - at least one player piece and one sink
//! - inert and sink names are unique
//!
//! ## Occupancy index
//!
//! `occupied` maps each taken cell to the orientation of the piece on it,
//! so both move validation and the beam march resolve a cell in O(1).
//!
//! ## Submodules
//!
//! - `moves`: player moves with the coupled computer displacement
//! - `beam`: the beam march deciding puzzle completion
//! - `render`: fixed-width text rendering

mod beam;
mod moves;
mod render;

pub use beam::BeamOutcome;
pub use moves::{Companion, MoveOutcome, Refusal};

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::core::{Category, Orientation, Piece, Position, Quadrant};
use crate::error::{ConstructionError, LookupError};

/// A square puzzle board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u32,
    player_pieces: FxHashMap<Quadrant, Piece>,
    computer_pieces: FxHashMap<Quadrant, Piece>,
    inert_pieces: FxHashMap<String, Piece>,
    sinks: FxHashMap<String, Piece>,
    occupied: FxHashMap<Position, Orientation>,
}

impl Board {
    /// Build a board from the four piece lists.
    ///
    /// Pieces are inserted category by category (player, computer, inert,
    /// sinks) and the first violated rule is returned. Nothing is kept on
    /// failure.
    ///
    /// ```
    /// use mirror_puzzle::board::Board;
    /// use mirror_puzzle::core::Piece;
    ///
    /// let board = Board::new(
    ///     2,
    ///     vec![Piece::new("Q2", (1, 1)).unwrap()],
    ///     vec![Piece::new("q2", (0, 0)).unwrap()],
    ///     vec![],
    ///     vec![Piece::new("s", (0, 1)).unwrap()],
    /// )
    /// .unwrap();
    /// assert!(board.check_puzzle_completion());
    /// ```
    #[instrument(skip_all, fields(size = size))]
    pub fn new(
        size: u32,
        player: Vec<Piece>,
        computer: Vec<Piece>,
        inert: Vec<Piece>,
        sinks: Vec<Piece>,
    ) -> Result<Self, ConstructionError> {
        if size == 0 {
            return Err(ConstructionError::ZeroSize);
        }
        if player.len() != computer.len() {
            return Err(ConstructionError::CountMismatch {
                player: player.len(),
                computer: computer.len(),
            });
        }
        if player.is_empty() {
            return Err(ConstructionError::NoPlayerPieces);
        }
        if sinks.is_empty() {
            return Err(ConstructionError::NoSinks);
        }

        let mut occupied = FxHashMap::default();

        let mut player_pieces = FxHashMap::default();
        for piece in player {
            let quadrant = check_piece(&piece, Category::Player, size)?;
            if player_pieces.contains_key(&quadrant) {
                return Err(duplicate(&piece));
            }
            claim(&mut occupied, &piece)?;
            player_pieces.insert(quadrant, piece);
        }

        let mut computer_pieces = FxHashMap::default();
        for piece in computer {
            let quadrant = check_piece(&piece, Category::Computer, size)?;
            let partner = piece.orientation().paired().and_then(Orientation::quadrant);
            if !partner.is_some_and(|q| player_pieces.contains_key(&q)) {
                return Err(ConstructionError::Unpaired {
                    name: piece.name().to_string(),
                });
            }
            if computer_pieces.contains_key(&quadrant) {
                return Err(duplicate(&piece));
            }
            claim(&mut occupied, &piece)?;
            computer_pieces.insert(quadrant, piece);
        }

        let inert_pieces = insert_named(inert, Category::Inert, size, &mut occupied)?;
        let sinks = insert_named(sinks, Category::Sink, size, &mut occupied)?;

        debug!(
            players = player_pieces.len(),
            inert = inert_pieces.len(),
            sinks = sinks.len(),
            "board constructed"
        );

        Ok(Self {
            size,
            player_pieces,
            computer_pieces,
            inert_pieces,
            sinks,
            occupied,
        })
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Names of the movable pieces, sorted.
    #[must_use]
    pub fn player_piece_names(&self) -> BTreeSet<String> {
        self.player_pieces.values().map(|p| p.name().to_string()).collect()
    }

    #[must_use]
    pub fn num_player_pieces(&self) -> usize {
        self.player_pieces.len()
    }

    #[must_use]
    pub fn num_computer_pieces(&self) -> usize {
        self.computer_pieces.len()
    }

    #[must_use]
    pub fn num_inert_pieces(&self) -> usize {
        self.inert_pieces.len()
    }

    #[must_use]
    pub fn num_sinks(&self) -> usize {
        self.sinks.len()
    }

    /// The player mirror of `quadrant`.
    pub fn player_piece(&self, quadrant: Quadrant) -> Result<&Piece, LookupError> {
        self.player_pieces
            .get(&quadrant)
            .ok_or(LookupError::NoPlayerPiece(quadrant))
    }

    /// The computer mirror of `quadrant`.
    pub fn computer_piece(&self, quadrant: Quadrant) -> Result<&Piece, LookupError> {
        self.computer_pieces
            .get(&quadrant)
            .ok_or(LookupError::NoComputerPiece(quadrant))
    }

    pub fn inert_piece(&self, name: &str) -> Result<&Piece, LookupError> {
        self.inert_pieces
            .get(name)
            .ok_or_else(|| LookupError::NoInertPiece(name.to_string()))
    }

    pub fn sink(&self, name: &str) -> Result<&Piece, LookupError> {
        self.sinks
            .get(name)
            .ok_or_else(|| LookupError::NoSink(name.to_string()))
    }

    /// Orientation of the piece on `position`, if any.
    #[must_use]
    pub fn occupant(&self, position: Position) -> Option<Orientation> {
        self.occupied.get(&position).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupied.contains_key(&position)
    }

    /// Every occupied cell, in no particular order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.occupied.keys().copied()
    }

    /// Every piece on the board: player, computer, inert, then sinks.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.player_pieces
            .values()
            .chain(self.computer_pieces.values())
            .chain(self.inert_pieces.values())
            .chain(self.sinks.values())
    }
}

/// Check category and bounds, returning the mirror quadrant for mirrors.
fn check_piece(piece: &Piece, expected: Category, size: u32) -> Result<Quadrant, ConstructionError> {
    check_category_and_bounds(piece, expected, size)?;
    piece
        .orientation()
        .quadrant()
        .ok_or_else(|| ConstructionError::WrongCategory {
            name: piece.name().to_string(),
            expected,
        })
}

fn check_category_and_bounds(piece: &Piece, expected: Category, size: u32) -> Result<(), ConstructionError> {
    if piece.category() != expected {
        return Err(ConstructionError::WrongCategory {
            name: piece.name().to_string(),
            expected,
        });
    }
    if !piece.position().in_bounds(size) {
        return Err(ConstructionError::OutOfBounds {
            name: piece.name().to_string(),
            position: piece.position(),
            size,
        });
    }
    Ok(())
}

fn claim(occupied: &mut FxHashMap<Position, Orientation>, piece: &Piece) -> Result<(), ConstructionError> {
    if occupied.contains_key(&piece.position()) {
        return Err(ConstructionError::Stacked {
            name: piece.name().to_string(),
            position: piece.position(),
        });
    }
    occupied.insert(piece.position(), piece.orientation());
    Ok(())
}

fn duplicate(piece: &Piece) -> ConstructionError {
    ConstructionError::Duplicate {
        category: piece.category(),
        name: piece.name().to_string(),
    }
}

fn insert_named(
    pieces: Vec<Piece>,
    category: Category,
    size: u32,
    occupied: &mut FxHashMap<Position, Orientation>,
) -> Result<FxHashMap<String, Piece>, ConstructionError> {
    let mut named = FxHashMap::default();
    for piece in pieces {
        check_category_and_bounds(&piece, category, size)?;
        if named.contains_key(piece.name()) {
            return Err(duplicate(&piece));
        }
        claim(occupied, &piece)?;
        named.insert(piece.name().to_string(), piece);
    }
    Ok(named)
}
