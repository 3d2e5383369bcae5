//! # mirror-puzzle
//!
//! Board engine for a two-layer mirror puzzle.
//!
//! The player slides mirror pieces around a square board. Every player mirror
//! is rigidly paired with a computer mirror that moves in a mirrored pattern.
//! A beam enters at the bottom-left corner travelling right, reflects off
//! mirrors, is absorbed by obstacles and the backs of mirrors, and the puzzle
//! is solved once it reaches a sink.
//!
//! ## Design Principles
//!
//! 1. **Board Is the Source of Truth**: every piece lives in the `Board`;
//!    pieces only move through `Board::player_move`.
//!
//! 2. **Validate Atomically**: a board is built from a complete layout or not
//!    at all.
//!
//! 3. **Errors vs. Refusals**: malformed requests are `MoveError`s; moves
//!    blocked by the edge or another piece are ordinary `MoveOutcome`s.
//!
//! ## Modules
//!
//! - `core`: positions, directions, orientations, pieces
//! - `board`: the board, moves, beam march and rendering
//! - `layout`: piece layouts and the text layout format
//! - `puzzles`: built-in layouts
//! - `session`: interactive play loop
//! - `error`: error types

pub mod core;
pub mod error;
pub mod board;
pub mod layout;
pub mod puzzles;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Category, Direction, Orientation, Piece, Position, Quadrant};
pub use crate::error::{ConstructionError, LookupError, MoveError};
pub use crate::board::{BeamOutcome, Board, Companion, MoveOutcome, Refusal};
pub use crate::layout::{PieceLayout, Placement};
pub use crate::session::{Session, SessionEnd};
