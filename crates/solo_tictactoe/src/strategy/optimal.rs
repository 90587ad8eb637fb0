//! Exhaustive minimax move selection.

use super::MoveStrategy;
use crate::rules::{is_full, winner};
use crate::{Board, Position, Symbol};
use rand::RngCore;
use tracing::{debug, instrument};

/// Plays perfectly by searching the whole game tree.
///
/// Scores are +1 for an AI win, -1 for an opponent win and 0 for a draw,
/// with no preference for faster wins. Ties at the root go to the lowest
/// index.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStrategy;

/// Minimax value of `board` from the AI's perspective.
///
/// Each recursive call owns its board copy.
fn minimax(board: Board, maximizing: bool, ai: Symbol, opponent: Symbol) -> i8 {
    if winner(&board, ai) {
        return 1;
    }
    if winner(&board, opponent) {
        return -1;
    }
    if is_full(&board) {
        return 0;
    }

    let to_move = if maximizing { ai } else { opponent };
    let scores = Position::ALL.into_iter().filter_map(|pos| {
        board
            .with_mark(pos, to_move)
            .ok()
            .map(|next| minimax(next, !maximizing, ai, opponent))
    });

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}

/// Scores every empty cell for `ai`, in ascending index order.
pub fn score_moves(board: Board, ai: Symbol, opponent: Symbol) -> Vec<(Position, i8)> {
    board
        .empty_positions()
        .into_iter()
        .filter_map(|pos| {
            board
                .with_mark(pos, ai)
                .ok()
                .map(|next| (pos, minimax(next, false, ai, opponent)))
        })
        .collect()
}

impl MoveStrategy for OptimalStrategy {
    fn name(&self) -> &'static str {
        "optimal"
    }

    #[instrument(skip(self, board, _rng))]
    fn choose(
        &self,
        board: Board,
        ai: Symbol,
        opponent: Symbol,
        _rng: &mut dyn RngCore,
    ) -> Option<Position> {
        let mut best: Option<(Position, i8)> = None;
        for (pos, score) in score_moves(board, ai, opponent) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        debug!(?best, "Minimax move");
        best.map(|(pos, _)| pos)
    }
}
