//! Win-then-block move selection.

use super::{MoveStrategy, RandomStrategy};
use crate::rules::winner;
use crate::{Board, Position, Symbol};
use rand::RngCore;
use tracing::{debug, instrument};

/// Takes an immediate win, otherwise blocks an immediate loss, otherwise
/// plays randomly.
///
/// Both scans run in ascending index order, so the lowest winning (or
/// blocking) cell is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

/// First empty cell where `symbol` would complete a line.
fn completing_cell(board: &Board, symbol: Symbol) -> Option<Position> {
    board.empty_positions().into_iter().find(|&pos| {
        board
            .with_mark(pos, symbol)
            .is_ok_and(|next| winner(&next, symbol))
    })
}

impl MoveStrategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    #[instrument(skip(self, board, rng))]
    fn choose(
        &self,
        board: Board,
        ai: Symbol,
        opponent: Symbol,
        rng: &mut dyn RngCore,
    ) -> Option<Position> {
        if let Some(pos) = completing_cell(&board, ai) {
            debug!(%pos, "Winning move");
            return Some(pos);
        }
        if let Some(pos) = completing_cell(&board, opponent) {
            debug!(%pos, "Blocking move");
            return Some(pos);
        }
        RandomStrategy.choose(board, ai, opponent, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell::{self, Empty as E};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const X: Cell = Cell::Occupied(Symbol::X);
    const O: Cell = Cell::Occupied(Symbol::O);

    fn choose(cells: [Cell; 9], ai: Symbol) -> Option<Position> {
        let mut rng = StdRng::seed_from_u64(3);
        HeuristicStrategy.choose(Board::from(cells), ai, ai.opponent(), &mut rng)
    }

    #[test]
    fn test_win_before_block() {
        let cells = [X, X, E, O, O, E, E, E, E];
        assert_eq!(choose(cells, Symbol::O), Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let cells = [X, X, E, E, O, E, E, E, E];
        assert_eq!(choose(cells, Symbol::O), Some(Position::TopRight));
    }

    #[test]
    fn test_lowest_winning_cell_first() {
        // O can win at 2 (top row) or 6 (left column).
        let cells = [O, O, E, O, X, X, E, X, E];
        assert_eq!(choose(cells, Symbol::O), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_diagonal() {
        let cells = [X, E, E, E, X, E, E, O, E];
        assert_eq!(choose(cells, Symbol::O), Some(Position::BottomRight));
    }

    #[test]
    fn test_input_board_is_untouched() {
        let board = Board::from([X, X, E, E, O, E, E, E, E]);
        let before = board;
        let mut rng = StdRng::seed_from_u64(0);
        HeuristicStrategy.choose(board, Symbol::O, Symbol::X, &mut rng);
        assert_eq!(board, before);
    }

    #[test]
    fn test_falls_back_to_empty_cell() {
        let board = Board::from([X, E, E, E, E, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(9);
        let pos = HeuristicStrategy
            .choose(board, Symbol::O, Symbol::X, &mut rng)
            .unwrap();
        assert!(board.is_empty(pos));
    }
}
