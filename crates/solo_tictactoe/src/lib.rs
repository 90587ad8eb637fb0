//! Single-player tic-tac-toe against an AI with three difficulty tiers.
//!
//! # Architecture
//!
//! - **Board**: 9 cells, win and draw rules ([`rules`])
//! - **Strategies**: random, heuristic and minimax move selection
//!   ([`strategy`]), one per [`Difficulty`]
//! - **Session**: a [`GameSession`] owned by the presentation layer,
//!   which applies a human move and the AI reply in one call
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{Difficulty, GameSession, Outcome, Symbol};
//!
//! let mut session = GameSession::with_seed(Difficulty::Hard, 7);
//! session.start(Symbol::X)?;
//!
//! let report = session.submit_human_move(4)?;
//! assert_eq!(*report.outcome(), Outcome::InProgress);
//! assert!(report.ai_move().is_some());
//! # Ok::<(), solo_tictactoe::InvalidMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod difficulty;
mod match_play;
mod phases;
mod position;
pub mod rules;
mod session;
pub mod strategy;
mod types;

pub use action::{InvalidMoveError, Move};
pub use contracts::{BoardConsistent, SingleWinner};
pub use difficulty::Difficulty;
pub use match_play::{MatchRecord, SeriesTally, play_match, play_series};
pub use phases::{Outcome, SessionPhase};
pub use position::Position;
pub use session::{Assignment, GameSession, MoveReport, Participant, SessionSnapshot};
pub use types::{Board, Cell, Symbol};

/// Rules shown to the player before choosing a mode.
pub const RULES: &str = "\
1. The game is played on a 3x3 grid.
2. Players take turns to mark a cell.
3. The first to align 3 marks wins.
4. If all cells are filled without a winner, it's a draw.
5. Have fun!";
