//! Move-selection policies for the AI.
//!
//! Every strategy receives its own copy of the board and proposes a
//! position; the caller decides whether to apply it.

mod heuristic;
mod optimal;
mod random;

pub use heuristic::HeuristicStrategy;
pub use optimal::{OptimalStrategy, score_moves};
pub use random::RandomStrategy;

use crate::{Board, Position, Symbol};
use rand::RngCore;

/// Chooses a cell for the AI.
pub trait MoveStrategy: std::fmt::Debug + Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Picks an empty position for `ai` on `board`.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn choose(
        &self,
        board: Board,
        ai: Symbol,
        opponent: Symbol,
        rng: &mut dyn RngCore,
    ) -> Option<Position>;
}
