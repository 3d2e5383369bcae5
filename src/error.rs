//! Error types.
//!
//! - `ConstructionError`: a layout could not become a board. Never leaves a
//!   partially built board behind.
//! - `MoveError`: the move request itself is malformed (unknown piece,
//!   illegal step shape). Board state is untouched.
//! - `LookupError`: a query named a piece that is not on the board.
//!
//! A move blocked by the board edge or another piece is not an error; see
//! `MoveOutcome::Refused`.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{Category, Orientation, Position, Quadrant};

/// Failure to build a board from a layout.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("board size must be positive")]
    ZeroSize,
    #[error("different number of player ({player}) and computer ({computer}) pieces")]
    CountMismatch { player: usize, computer: usize },
    #[error("board has no player pieces")]
    NoPlayerPieces,
    #[error("board has no sinks")]
    NoSinks,
    #[error("piece {name} at {position} is outside the {size}x{size} board")]
    OutOfBounds { name: String, position: Position, size: u32 },
    #[error("stacked pieces: {name} placed on occupied cell {position}")]
    Stacked { name: String, position: Position },
    #[error("no matching player piece for computer piece {name}")]
    Unpaired { name: String },
    #[error("duplicate {category} piece {name}")]
    Duplicate { category: Category, name: String },
    #[error("unknown piece name {0:?}")]
    UnknownPieceName(String),
    #[error("piece {name} cannot have orientation {orientation:?}")]
    MismatchedOrientation { name: String, orientation: Orientation },
    #[error("piece {name} is not a {expected} piece")]
    WrongCategory { name: String, expected: Category },
    #[error("cannot read layout file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("layout has no Size record")]
    MissingSize,
    #[error("line {line}: Size given more than once")]
    DuplicateSize { line: usize },
}

/// A move request the board cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot move player piece {0} because it does not exist")]
    UnknownPiece(String),
    #[error("cannot move from {from} to {to}: pieces move one cell up, down, left or right")]
    IllegalStep { from: Position, to: Position },
}

/// A query for a piece that is not on the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no player piece {0:?} on the board")]
    NoPlayerPiece(Quadrant),
    #[error("no computer piece {0:?} on the board")]
    NoComputerPiece(Quadrant),
    #[error("no inert piece {0} on the board")]
    NoInertPiece(String),
    #[error("no sink {0} on the board")]
    NoSink(String),
}
