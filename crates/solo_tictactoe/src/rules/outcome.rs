//! Outcome classification for a human-vs-AI board.

use super::draw::is_draw;
use super::win::winner;
use crate::{Board, Outcome, Symbol};
use tracing::instrument;

/// Classifies `board` from the session's point of view.
///
/// Wins are checked before fullness, so a board completed by a winning
/// ninth mark is a win, not a draw.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board, human: Symbol, ai: Symbol) -> Outcome {
    if winner(board, human) {
        Outcome::HumanWin
    } else if winner(board, ai) {
        Outcome::AiWin
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new(), Symbol::X, Symbol::O), Outcome::InProgress);
    }

    #[test]
    fn test_win_is_attributed_by_symbol() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.place(pos, Symbol::O).unwrap();
        }
        assert_eq!(outcome(&board, Symbol::X, Symbol::O), Outcome::AiWin);
        assert_eq!(outcome(&board, Symbol::O, Symbol::X), Outcome::HumanWin);
    }

    #[test]
    fn test_winning_last_mark_is_not_a_draw() {
        // X O X / X O O / X X O after X plays bottom-left
        let mut board = Board::new();
        let marks = [
            Symbol::X,
            Symbol::O,
            Symbol::X,
            Symbol::X,
            Symbol::O,
            Symbol::O,
            Symbol::X,
            Symbol::X,
            Symbol::O,
        ];
        for (pos, symbol) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, symbol).unwrap();
        }
        assert_eq!(outcome(&board, Symbol::X, Symbol::O), Outcome::HumanWin);
    }
}
