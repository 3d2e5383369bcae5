//! Text layout format.
//!
//! One record per line, whitespace separated:
//!
//! ```text
//! # 4x4 board
//! Size 4
//! PP       Q1 3,0
//! Computer q1 0,0
//! inert    X  1,1
//! sink     s  1,2
//! ```
//!
//! Blank lines and lines starting with `#` or a space are skipped. The
//! piece's category comes from its name; the record keyword must agree with
//! it. Exactly one `Size` record is required, anywhere in the file.

use std::path::Path;
use std::str::FromStr;

use smallvec::SmallVec;
use tracing::debug;

use super::{PieceLayout, Placement};
use crate::core::{Category, Orientation, Position};
use crate::error::ConstructionError;

impl PieceLayout {
    /// Parse a text layout.
    ///
    /// ```
    /// use mirror_puzzle::layout::PieceLayout;
    ///
    /// let layout = PieceLayout::parse("Size 2\nPP Q2 1,1\nComputer q2 0,0\nsink s 0,1\n").unwrap();
    /// assert_eq!(layout.size, 2);
    /// assert!(layout.build().unwrap().check_puzzle_completion());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ConstructionError> {
        let mut size = None;
        let mut layout = PieceLayout::default();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if is_comment(line) {
                continue;
            }

            let tokens: SmallVec<[&str; 3]> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [] => continue,
                ["Size", value] => {
                    if size.is_some() {
                        return Err(ConstructionError::DuplicateSize { line: line_no });
                    }
                    let value = value
                        .parse::<u32>()
                        .map_err(|_| parse_error(line_no, format!("invalid board size {value:?}")))?;
                    size = Some(value);
                }
                ["Size", ..] => {
                    return Err(parse_error(line_no, "expected `Size <n>`".to_string()));
                }
                [keyword, name, coords] => {
                    let category = keyword_category(keyword)
                        .ok_or_else(|| parse_error(line_no, format!("unknown record type {keyword:?}")))?;
                    let position = parse_position(coords).ok_or_else(|| {
                        parse_error(line_no, format!("malformed position {coords:?}, expected <row>,<col>"))
                    })?;
                    let orientation = Orientation::from_name(name)
                        .ok_or_else(|| parse_error(line_no, format!("unknown piece name {name:?}")))?;
                    if orientation.category() != category {
                        return Err(parse_error(
                            line_no,
                            format!("{name} is a {} piece, not {category}", orientation.category()),
                        ));
                    }
                    layout.placements_mut(category).push(Placement::new(*name, position));
                }
                [keyword, ..] => {
                    let message = match keyword_category(keyword) {
                        Some(_) => format!("expected `{keyword} <name> <row>,<col>`"),
                        None => format!("unknown record type {keyword:?}"),
                    };
                    return Err(parse_error(line_no, message));
                }
            }
        }

        layout.size = size.ok_or(ConstructionError::MissingSize)?;
        Ok(layout)
    }

    /// Read and parse a text layout file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConstructionError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading layout");
        let text = std::fs::read_to_string(path).map_err(|source| ConstructionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    fn placements_mut(&mut self, category: Category) -> &mut Vec<Placement> {
        match category {
            Category::Player => &mut self.player,
            Category::Computer => &mut self.computer,
            Category::Inert => &mut self.inert,
            Category::Sink => &mut self.sinks,
        }
    }
}

impl FromStr for PieceLayout {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with(' ')
}

fn keyword_category(keyword: &str) -> Option<Category> {
    match keyword {
        "PP" => Some(Category::Player),
        "Computer" => Some(Category::Computer),
        "inert" => Some(Category::Inert),
        "sink" => Some(Category::Sink),
        _ => None,
    }
}

fn parse_position(coords: &str) -> Option<Position> {
    let (row, col) = coords.split_once(',')?;
    Some(Position::new(row.parse().ok()?, col.parse().ok()?))
}

fn parse_error(line: usize, message: String) -> ConstructionError {
    ConstructionError::Parse { line, message }
}
