//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Position, Symbol};
use tracing::instrument;

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `symbol` occupies all three cells of any line.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board, symbol: Symbol) -> bool {
    let mark = Cell::Occupied(symbol);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Returns the symbol holding a complete line, if any.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|&symbol| winner(board, symbol))
}
