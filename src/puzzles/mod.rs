//! Built-in puzzles.
//!
//! Used by the driver when no layout file is given, and handy in tests.

use crate::layout::PieceLayout;

/// The classic 4x4 puzzle.
///
/// ```text
///     0   1   2   3
///   +---+---+---+---+
/// 0 |q1 |q2 |q3 |   |
///   +---+---+---+---+
/// 1 |   | X | s |   |
///   +---+---+---+---+
/// 2 |   |   |   |   |
///   +---+---+---+---+
/// 3 |Q1 |Q2 |Q3 |   |
///   +---+---+---+---+
/// ```
///
/// The beam starts on the back of `Q1`, so the first move has to clear the
/// bottom-left corner.
#[must_use]
pub fn classic() -> PieceLayout {
    PieceLayout::new(4)
        .with_player("Q1", (3, 0))
        .with_player("Q2", (3, 1))
        .with_player("Q3", (3, 2))
        .with_computer("q1", (0, 0))
        .with_computer("q2", (0, 1))
        .with_computer("q3", (0, 2))
        .with_inert("X", (1, 1))
        .with_sink("s", (1, 2))
}
