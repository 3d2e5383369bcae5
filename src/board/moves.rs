//! Player moves and the coupled computer displacement.
//!
//! A player piece moves exactly one cell up, down, left or right. Any other
//! step shape is a `MoveError`; a well-formed step onto an occupied or
//! off-board cell is refused without touching the board.
//!
//! After a player move by `(dy, dx)` the paired computer piece tries to move
//! by `(-dy, +dx)`: same column motion, mirrored row motion. If that cell is
//! off the board or taken, the computer piece stays where it is and the
//! player move still counts.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::Board;
use crate::core::{Orientation, Position};
use crate::error::MoveError;

/// Why a well-formed move did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refusal {
    OffBoard,
    Occupied,
}

/// What the paired computer piece did after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Companion {
    /// Moved to the given cell.
    Followed(Position),
    /// Its target was taken or off the board.
    Stayed,
}

/// Result of a well-formed move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved { companion: Companion },
    Refused(Refusal),
}

impl MoveOutcome {
    /// True iff the player piece moved.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

impl Board {
    /// Move the player piece `name` to `to`.
    ///
    /// ```
    /// use mirror_puzzle::board::{Board, Companion, MoveOutcome};
    /// use mirror_puzzle::core::{Piece, Position};
    ///
    /// let mut board = Board::new(
    ///     4,
    ///     vec![Piece::new("Q1", (3, 0)).unwrap()],
    ///     vec![Piece::new("q1", (0, 0)).unwrap()],
    ///     vec![],
    ///     vec![Piece::new("s", (2, 2)).unwrap()],
    /// )
    /// .unwrap();
    ///
    /// let outcome = board.player_move("Q1", Position::new(2, 0)).unwrap();
    /// assert_eq!(outcome, MoveOutcome::Moved { companion: Companion::Followed(Position::new(1, 0)) });
    /// assert!(board.player_move("Q1", Position::new(0, 0)).is_err());
    /// ```
    #[instrument(skip(self))]
    pub fn player_move(&mut self, name: &str, to: Position) -> Result<MoveOutcome, MoveError> {
        let quadrant = match Orientation::from_name(name) {
            Some(Orientation::Player(q)) if self.player_pieces.contains_key(&q) => q,
            _ => return Err(MoveError::UnknownPiece(name.to_string())),
        };

        let from = self.player_pieces[&quadrant].position();
        let (dy, dx) = from.delta_to(to);
        if dx.abs() > 1 || dy.abs() > 1 || (dx.abs() == 1 && dy.abs() == 1) {
            return Err(MoveError::IllegalStep { from, to });
        }

        if !to.in_bounds(self.size) {
            debug!(%from, %to, "move refused: off board");
            return Ok(MoveOutcome::Refused(Refusal::OffBoard));
        }
        if self.occupied.contains_key(&to) {
            debug!(%from, %to, "move refused: occupied");
            return Ok(MoveOutcome::Refused(Refusal::Occupied));
        }

        self.relocate(from, to);
        if let Some(piece) = self.player_pieces.get_mut(&quadrant) {
            piece.set_position(to);
        }

        let companion = match self.computer_pieces.get(&quadrant).map(|p| p.position()) {
            Some(current) => match current.offset(-dy, dx, self.size) {
                Some(target) if !self.occupied.contains_key(&target) => {
                    self.relocate(current, target);
                    if let Some(piece) = self.computer_pieces.get_mut(&quadrant) {
                        piece.set_position(target);
                    }
                    Companion::Followed(target)
                }
                _ => Companion::Stayed,
            },
            None => Companion::Stayed,
        };

        debug!(%from, %to, ?companion, "player move");
        Ok(MoveOutcome::Moved { companion })
    }

    /// Move an occupancy entry from `from` to `to`.
    fn relocate(&mut self, from: Position, to: Position) {
        if let Some(orientation) = self.occupied.remove(&from) {
            self.occupied.insert(to, orientation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, Quadrant};

    fn piece(name: &str, row: u32, col: u32) -> Piece {
        Piece::new(name, (row, col)).unwrap()
    }

    fn fixture() -> Board {
        Board::new(
            4,
            vec![piece("Q1", 3, 0), piece("Q4", 3, 1), piece("Q2", 3, 2)],
            vec![piece("q1", 0, 0), piece("q4", 0, 1), piece("q2", 0, 2)],
            vec![piece("X", 1, 1)],
            vec![piece("s", 2, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_diagonal_and_long_steps_are_errors() {
        let mut board = fixture();
        let before = board.clone();
        assert!(matches!(
            board.player_move("Q1", Position::new(2, 1)),
            Err(MoveError::IllegalStep { .. })
        ));
        assert!(matches!(
            board.player_move("Q1", Position::new(3, 2)),
            Err(MoveError::IllegalStep { .. })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_unknown_piece_is_error() {
        let mut board = fixture();
        assert_eq!(
            board.player_move("Q3", Position::new(2, 0)),
            Err(MoveError::UnknownPiece("Q3".to_string()))
        );
        assert_eq!(
            board.player_move("q1", Position::new(1, 0)),
            Err(MoveError::UnknownPiece("q1".to_string()))
        );
        assert_eq!(
            board.player_move("nope", Position::new(1, 0)),
            Err(MoveError::UnknownPiece("nope".to_string()))
        );
    }

    #[test]
    fn test_blocked_moves_are_refused() {
        let mut board = fixture();
        assert_eq!(
            board.player_move("Q1", Position::new(3, 1)),
            Ok(MoveOutcome::Refused(Refusal::Occupied))
        );
        assert!(board.player_move("Q1", Position::new(2, 0)).unwrap().succeeded());
        assert_eq!(
            board.player_move("Q1", Position::new(1, 0)),
            Ok(MoveOutcome::Refused(Refusal::Occupied))
        );
        assert!(board.player_move("Q1", Position::new(2, 1)).unwrap().succeeded());
        assert_eq!(
            board.player_move("Q1", Position::new(1, 1)),
            Ok(MoveOutcome::Refused(Refusal::Occupied))
        );
    }

    #[test]
    fn test_off_board_refused() {
        let mut board = fixture();
        let before = board.clone();
        assert_eq!(
            board.player_move("Q2", Position::new(4, 2)),
            Ok(MoveOutcome::Refused(Refusal::OffBoard))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_zero_step_is_refused_as_occupied() {
        let mut board = fixture();
        assert_eq!(
            board.player_move("Q4", Position::new(3, 1)),
            Ok(MoveOutcome::Refused(Refusal::Occupied))
        );
    }

    #[test]
    fn test_legal_move_updates_positions_and_occupancy() {
        let mut board = fixture();
        assert!(!board.is_occupied(Position::new(2, 0)));

        let outcome = board.player_move("Q1", Position::new(2, 0)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                companion: Companion::Followed(Position::new(1, 0))
            }
        );

        assert!(board.is_occupied(Position::new(2, 0)));
        assert!(!board.is_occupied(Position::new(3, 0)));
        assert!(board.is_occupied(Position::new(1, 0)));
        assert!(!board.is_occupied(Position::new(0, 0)));
        assert_eq!(board.player_piece(Quadrant::Q1).unwrap().position(), Position::new(2, 0));
        assert_eq!(board.computer_piece(Quadrant::Q1).unwrap().position(), Position::new(1, 0));
    }

    #[test]
    fn test_computer_piece_stays_on_board() {
        let mut board = Board::new(
            4,
            vec![piece("Q1", 2, 0)],
            vec![piece("q1", 0, 0)],
            vec![piece("X", 1, 1)],
            vec![piece("s", 2, 2)],
        )
        .unwrap();

        let outcome = board.player_move("Q1", Position::new(3, 0)).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { companion: Companion::Stayed });
        assert_eq!(board.computer_piece(Quadrant::Q1).unwrap().position(), Position::new(0, 0));
        assert_eq!(board.occupant(Position::new(0, 0)), Some(Orientation::Computer(Quadrant::Q1)));
    }

    #[test]
    fn test_computer_piece_blocked_by_occupied_cell() {
        let mut board = fixture();
        // Q4 moves up, so q4 at (0,1) would move down onto X at (1,1).
        let outcome = board.player_move("Q4", Position::new(2, 1)).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { companion: Companion::Stayed });
        assert_eq!(board.player_piece(Quadrant::Q4).unwrap().position(), Position::new(2, 1));
        assert_eq!(board.computer_piece(Quadrant::Q4).unwrap().position(), Position::new(0, 1));
        assert_eq!(board.occupied_positions().count(), 8);
    }

    #[test]
    fn test_computer_piece_mirrors_horizontal_moves() {
        let mut board = fixture();
        board.player_move("Q2", Position::new(3, 3)).unwrap();
        assert_eq!(board.computer_piece(Quadrant::Q2).unwrap().position(), Position::new(0, 3));
        board.player_move("Q2", Position::new(2, 3)).unwrap();
        assert_eq!(board.computer_piece(Quadrant::Q2).unwrap().position(), Position::new(1, 3));
    }
}
