//! Named board positions.

use crate::action::InvalidMoveError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses an index (0-8) or a label (case-insensitive).
    ///
    /// Labels must match exactly apart from case, so "center" is not
    /// confused with "top-center".
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase().replace(' ', "-");
        Position::iter().find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Filters positions by board state - returns only empty cells,
    /// in ascending index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = InvalidMoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(InvalidMoveError::OutOfRange(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_all() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_and_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" 8 "), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("9"), None);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("Top-Center"), Some(Position::TopCenter));
        assert_eq!(Position::from_label_or_number("bottom left"), Some(Position::BottomLeft));
        assert_eq!(Position::from_label_or_number("middle"), None);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(Position::try_from(12), Err(InvalidMoveError::OutOfRange(12)));
    }
}
