//! Beam march: decides whether the puzzle is solved.
//!
//! The beam enters the bottom-left cell `(size - 1, 0)` travelling right and
//! is followed one cell at a time. Each cell it enters is resolved the same
//! way, the entry cell included:
//!
//! - empty: keep going
//! - mirror (player or computer): turn per `Quadrant::reflect`, or stop if
//!   the beam hit the back of the mirror
//! - inert piece: absorbed
//! - sink: solved
//!
//! Turning happens on the mirror's own cell, so a mirror edge-adjacent to
//! another is resolved on the very next step (chained reflection).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use super::Board;
use crate::core::{Direction, Orientation, Position};

/// How the beam march ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamOutcome {
    /// Reached the sink on this cell.
    Sink(Position),
    /// Stopped on this cell: inert piece or the back of a mirror.
    Absorbed(Position),
    /// Left the board from `last` while travelling `direction`.
    LeftBoard { last: Position, direction: Direction },
}

impl BeamOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, BeamOutcome::Sink(_))
    }
}

impl Board {
    /// True iff the beam reaches a sink.
    #[must_use]
    pub fn check_puzzle_completion(&self) -> bool {
        self.trace_beam().is_solved()
    }

    /// Follow the beam until it is absorbed, leaves the board or reaches a
    /// sink.
    ///
    /// ```
    /// use mirror_puzzle::board::{BeamOutcome, Board};
    /// use mirror_puzzle::core::{Direction, Piece, Position};
    ///
    /// let board = Board::new(
    ///     3,
    ///     vec![Piece::new("Q1", (0, 0)).unwrap()],
    ///     vec![Piece::new("q1", (0, 1)).unwrap()],
    ///     vec![],
    ///     vec![Piece::new("s", (1, 1)).unwrap()],
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     board.trace_beam(),
    ///     BeamOutcome::LeftBoard { last: Position::new(2, 2), direction: Direction::Right }
    /// );
    /// ```
    #[instrument(skip(self), level = "debug")]
    pub fn trace_beam(&self) -> BeamOutcome {
        let mut position = Position::new(self.size - 1, 0);
        let mut direction = Direction::Right;

        // Each (cell, direction) state is entered at most once.
        let side = u64::from(self.size);
        let budget = side.saturating_mul(side).saturating_mul(4).saturating_add(1);
        for _ in 0..budget {
            trace!(%position, ?direction, "beam step");
            let stopped = match self.occupant(position) {
                None => None,
                Some(Orientation::Sink) => Some(BeamOutcome::Sink(position)),
                Some(Orientation::Inert) => Some(BeamOutcome::Absorbed(position)),
                Some(Orientation::Player(quadrant) | Orientation::Computer(quadrant)) => {
                    match quadrant.reflect(direction) {
                        Some(outgoing) => {
                            direction = outgoing;
                            None
                        }
                        None => Some(BeamOutcome::Absorbed(position)),
                    }
                }
            };
            if let Some(outcome) = stopped {
                debug!(?outcome, "beam stopped");
                return outcome;
            }

            match position.step(direction, self.size) {
                Some(next) => position = next,
                None => {
                    let outcome = BeamOutcome::LeftBoard {
                        last: position,
                        direction,
                    };
                    debug!(?outcome, "beam left the board");
                    return outcome;
                }
            }
        }

        warn!(%position, "beam march exhausted its step budget");
        BeamOutcome::Absorbed(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    fn piece(name: &str, row: u32, col: u32) -> Piece {
        Piece::new(name, (row, col)).unwrap()
    }

    type Spots<'a> = &'a [(&'a str, u32, u32)];

    fn list(items: Spots<'_>) -> Vec<Piece> {
        items.iter().map(|&(n, r, c)| piece(n, r, c)).collect()
    }

    fn board(size: u32, player: Spots<'_>, computer: Spots<'_>, inert: Spots<'_>, sinks: Spots<'_>) -> Board {
        Board::new(size, list(player), list(computer), list(inert), list(sinks)).unwrap()
    }

    #[test]
    fn test_straight_into_sink() {
        let b = board(3, &[("Q1", 0, 0)], &[("q1", 0, 1)], &[], &[("s", 2, 2)]);
        assert_eq!(b.trace_beam(), BeamOutcome::Sink(Position::new(2, 2)));
        assert!(b.check_puzzle_completion());
    }

    #[test]
    fn test_sink_off_the_beam_path() {
        let b = board(3, &[("Q1", 0, 0)], &[("q1", 1, 0)], &[], &[("s", 0, 2)]);
        assert!(!b.check_puzzle_completion());
    }

    #[test]
    fn test_single_reflection_into_sink() {
        let b = board(2, &[("Q2", 1, 1)], &[("q2", 0, 0)], &[], &[("s", 0, 1)]);
        assert_eq!(b.trace_beam(), BeamOutcome::Sink(Position::new(0, 1)));
    }

    #[test]
    fn test_start_on_mirror_then_second_mirror() {
        let b = board(
            3,
            &[("Q2", 2, 0), ("Q4", 0, 0)],
            &[("q2", 1, 1), ("q4", 2, 2)],
            &[],
            &[("s", 0, 2)],
        );
        assert!(b.check_puzzle_completion());
    }

    #[test]
    fn test_start_on_back_of_mirror() {
        let b = board(3, &[("Q1", 2, 0)], &[("q1", 0, 0)], &[], &[("s", 2, 2)]);
        assert_eq!(b.trace_beam(), BeamOutcome::Absorbed(Position::new(2, 0)));
    }

    #[test]
    fn test_start_on_mirror_turning_off_board() {
        let b = board(3, &[("Q3", 2, 0)], &[("q3", 0, 0)], &[], &[("s", 2, 2)]);
        assert_eq!(
            b.trace_beam(),
            BeamOutcome::LeftBoard {
                last: Position::new(2, 0),
                direction: Direction::Down
            }
        );
    }

    #[test]
    fn test_inert_absorbs() {
        let b = board(3, &[("Q1", 0, 0)], &[("q1", 0, 1)], &[("X", 2, 1)], &[("s", 2, 2)]);
        assert_eq!(b.trace_beam(), BeamOutcome::Absorbed(Position::new(2, 1)));
    }

    #[test]
    fn test_computer_mirror_reflects() {
        let b = board(4, &[("Q2", 0, 3)], &[("q2", 3, 2)], &[], &[("s", 1, 2)]);
        assert_eq!(b.trace_beam(), BeamOutcome::Sink(Position::new(1, 2)));
    }

    #[test]
    fn test_chained_reflection_into_back_of_mirror() {
        let open = board(4, &[("Q2", 3, 1)], &[("q2", 0, 3)], &[], &[("s", 0, 1)]);
        assert!(open.check_puzzle_completion());

        let blocked = board(
            4,
            &[("Q2", 3, 1), ("Q1", 2, 1)],
            &[("q2", 0, 3), ("q1", 0, 2)],
            &[],
            &[("s", 0, 1)],
        );
        assert_eq!(blocked.trace_beam(), BeamOutcome::Absorbed(Position::new(2, 1)));
    }

    #[test]
    fn test_chained_reflection_through_two_mirrors() {
        let b = board(
            4,
            &[("Q2", 3, 1), ("Q4", 2, 1)],
            &[("q2", 0, 0), ("q4", 0, 1)],
            &[],
            &[("s", 2, 3)],
        );
        assert_eq!(b.trace_beam(), BeamOutcome::Sink(Position::new(2, 3)));
    }

    #[test]
    fn test_reflection_into_back_of_computer_mirror() {
        let b = board(2, &[("Q2", 1, 1)], &[("q2", 0, 1)], &[], &[("s", 0, 0)]);
        assert_eq!(b.trace_beam(), BeamOutcome::Absorbed(Position::new(0, 1)));
    }

    #[test]
    fn test_reflection_off_top_edge() {
        let b = board(3, &[("Q2", 2, 2)], &[("q2", 0, 0)], &[], &[("s", 1, 0)]);
        assert_eq!(
            b.trace_beam(),
            BeamOutcome::LeftBoard {
                last: Position::new(0, 2),
                direction: Direction::Up
            }
        );
    }

    #[test]
    fn test_completion_is_repeatable() {
        let b = board(2, &[("Q2", 1, 1)], &[("q2", 0, 0)], &[], &[("s", 0, 1)]);
        assert_eq!(b.check_puzzle_completion(), b.check_puzzle_completion());
        assert_eq!(b.trace_beam(), b.trace_beam());
    }
}
