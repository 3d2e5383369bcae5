//! Fixed-width text rendering.
//!
//! ```text
//!     0   1   2   3
//!   +---+---+---+---+
//! 0 |q1 |q2 |q3 |   |
//!   +---+---+---+---+
//! 1 |   | X | s |   |
//!   +---+---+---+---+
//! ```
//!
//! Each cell is three characters wide and shows the piece's name centred,
//! truncated to three characters.

use std::fmt;
use std::io;

use super::Board;

const SQUARE_WIDTH: usize = 3;

impl Board {
    /// Write the rendered board to `out`.
    pub fn print_board<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    fn cell_names(&self) -> Vec<Vec<String>> {
        let size = self.size as usize;
        let mut grid = vec![vec![String::new(); size]; size];
        for piece in self.pieces() {
            let position = piece.position();
            grid[position.row as usize][position.col as usize] =
                piece.name().chars().take(SQUARE_WIDTH).collect();
        }
        grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.size.saturating_sub(1).to_string().len();
        let margin = " ".repeat(label_width + 1);
        let filler = format!("{}+{}", margin, "---+".repeat(self.size as usize));

        let mut header = margin.clone();
        for col in 0..self.size {
            header.push_str(&format!(" {:^width$}", col, width = SQUARE_WIDTH));
        }
        writeln!(f, "{}", header.trim_end())?;
        writeln!(f, "{}", filler)?;

        for (row, names) in self.cell_names().iter().enumerate() {
            write!(f, "{:>width$} |", row, width = label_width)?;
            for name in names {
                write!(f, "{:^width$}|", name, width = SQUARE_WIDTH)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", filler)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::core::Piece;

    fn small() -> Board {
        Board::new(
            2,
            vec![Piece::new("Q2", (1, 1)).unwrap()],
            vec![Piece::new("q2", (0, 0)).unwrap()],
            vec![],
            vec![Piece::new("s", (0, 1)).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn test_render_small_board() {
        let expected = "\
    0   1
  +---+---+
0 |q2 | s |
  +---+---+
1 |   |Q2 |
  +---+---+
";
        assert_eq!(small().to_string(), expected);
    }

    #[test]
    fn test_print_board_matches_display() {
        let board = small();
        let mut out = Vec::new();
        board.print_board(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), board.to_string());
    }

    #[test]
    fn test_long_names_truncated_and_wide_labels() {
        let board = Board::new(
            11,
            vec![Piece::new("Q1", (10, 10)).unwrap()],
            vec![Piece::new("q1", (0, 0)).unwrap()],
            vec![Piece::new("Xwall", (5, 5)).unwrap()],
            vec![Piece::new("s", (0, 10)).unwrap()],
        )
        .unwrap();
        let text = board.to_string();
        assert!(text.contains("|Xwa|"));
        assert!(text.lines().any(|l| l.starts_with("10 |")));
        assert!(text.lines().any(|l| l.starts_with(" 0 |q1 |")));
        // header + (row + filler) per row + top filler
        assert_eq!(text.lines().count(), 2 + 2 * 11);
    }
}
