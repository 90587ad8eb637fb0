//! Board invariants checked after every session mutation.

use crate::rules::winner;
use crate::{Board, Symbol};
use tracing::{instrument, warn};

/// Invariant: marks alternate starting with X, so X leads O by 0 or 1.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true when the mark counts are reachable by alternating play.
    #[instrument(level = "trace", skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Symbol::X);
        let o_count = board.count(Symbol::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: at most one symbol holds a complete line.
pub struct SingleWinner;

impl SingleWinner {
    /// Returns true unless both symbols hold a line.
    #[instrument(level = "trace", skip(board))]
    pub fn holds(board: &Board) -> bool {
        let valid = !(winner(board, Symbol::X) && winner(board, Symbol::O));
        if !valid {
            warn!("Both symbols hold a winning line");
        }
        valid
    }
}

/// Asserts that all board invariants hold (debug builds only).
pub fn assert_invariants(board: &Board) {
    debug_assert!(BoardConsistent::holds(board), "Board consistency violated");
    debug_assert!(SingleWinner::holds(board), "Both symbols hold a winning line");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_board_consistent() {
        assert!(BoardConsistent::holds(&Board::new()));
        assert!(SingleWinner::holds(&Board::new()));
    }

    #[test]
    fn test_o_ahead_is_inconsistent() {
        let mut board = Board::new();
        board.place(Position::Center, Symbol::O).unwrap();
        assert!(!BoardConsistent::holds(&board));
    }

    #[test]
    fn test_x_two_ahead_is_inconsistent() {
        let mut board = Board::new();
        board.place(Position::Center, Symbol::X).unwrap();
        board.place(Position::TopLeft, Symbol::X).unwrap();
        assert!(!BoardConsistent::holds(&board));
    }

    #[test]
    fn test_double_winner_detected() {
        use crate::Cell::{Empty as E, Occupied};
        let (x, o) = (Occupied(Symbol::X), Occupied(Symbol::O));
        let board = Board::from([x, x, x, o, o, o, E, E, E]);
        assert!(!SingleWinner::holds(&board));
    }
}
