//! Core value types: positions, directions, orientations and pieces.
//!
//! These carry no board state of their own. The pairing and reflection
//! tables live here as pure functions on `Orientation` and `Quadrant`.

pub mod position;
pub mod orientation;
pub mod piece;

pub use position::{Direction, Position};
pub use orientation::{Category, Orientation, Quadrant};
pub use piece::Piece;
