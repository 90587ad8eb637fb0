//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Symbol};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Symbol::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = [
            Symbol::X,
            Symbol::O,
            Symbol::X,
            Symbol::O,
            Symbol::X,
            Symbol::X,
            Symbol::O,
            Symbol::X,
            Symbol::O,
        ];
        for (pos, symbol) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, symbol).unwrap();
        }

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let mut board = Board::new();
        let marks = [
            Symbol::X,
            Symbol::X,
            Symbol::X,
            Symbol::O,
            Symbol::O,
            Symbol::X,
            Symbol::O,
            Symbol::X,
            Symbol::O,
        ];
        for (pos, symbol) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, symbol).unwrap();
        }

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
