//! Uniformly random move selection.

use super::MoveStrategy;
use crate::{Board, Position, Symbol};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    #[instrument(skip(self, board, rng))]
    fn choose(
        &self,
        board: Board,
        _ai: Symbol,
        _opponent: Symbol,
        rng: &mut dyn RngCore,
    ) -> Option<Position> {
        let empty = board.empty_positions();
        let choice = empty.choose(rng).copied();
        debug!(candidates = empty.len(), ?choice, "Random move");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_only_picks_empty_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.place(pos, Symbol::X).unwrap();
        }
        board.place(Position::TopRight, Symbol::O).unwrap();

        for _ in 0..200 {
            let pos = RandomStrategy
                .choose(board, Symbol::O, Symbol::X, &mut rng)
                .unwrap();
            assert!(board.is_empty(pos), "picked occupied {pos}");
        }
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();
        let mut symbol = Symbol::X;
        for pos in Position::ALL.into_iter().filter(|&p| p != Position::MiddleLeft) {
            board.place(pos, symbol).unwrap();
            symbol = symbol.opponent();
        }
        assert_eq!(
            RandomStrategy.choose(board, Symbol::X, Symbol::O, &mut rng),
            Some(Position::MiddleLeft)
        );
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Symbol::X).unwrap();
        }
        assert_eq!(RandomStrategy.choose(board, Symbol::X, Symbol::O, &mut rng), None);
    }

    #[test]
    fn test_reaches_every_empty_cell() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::new();
        let mut seen = [false; 9];
        for _ in 0..500 {
            let pos = RandomStrategy
                .choose(board, Symbol::X, Symbol::O, &mut rng)
                .unwrap();
            seen[pos.to_index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
