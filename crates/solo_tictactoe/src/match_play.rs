//! Strategy-vs-strategy games.
//!
//! Used to check the tiers against each other and by the `simulate`
//! command of the terminal front end.

use crate::action::{InvalidMoveError, Move};
use crate::difficulty::Difficulty;
use crate::rules::{check_winner, is_full};
use crate::strategy::MoveStrategy;
use crate::types::{Board, Symbol};
use derive_getters::Getters;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A finished strategy-vs-strategy game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Final board.
    board: Board,
    /// Symbol holding a line, `None` for a draw.
    winner: Option<Symbol>,
    /// Every move in order, starting with X.
    moves: Vec<Move>,
}

/// Plays `x` against `o` from an empty board until a line or a full board.
///
/// Fails if a strategy proposes an occupied cell.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_match(
    x: &dyn MoveStrategy,
    o: &dyn MoveStrategy,
    rng: &mut dyn RngCore,
) -> Result<MatchRecord, InvalidMoveError> {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(9);
    let mut to_move = Symbol::OPENING;

    while check_winner(&board).is_none() && !is_full(&board) {
        let strategy = match to_move {
            Symbol::X => x,
            Symbol::O => o,
        };
        let Some(position) = strategy.choose(board, to_move, to_move.opponent(), rng) else {
            break;
        };
        board.place(position, to_move)?;
        moves.push(Move::new(to_move, position));
        to_move = to_move.opponent();
    }

    let winner = check_winner(&board);
    debug!(?winner, moves = moves.len(), "Match finished");
    Ok(MatchRecord {
        board,
        winner,
        moves,
    })
}

/// Results of a series from the first-named tier's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeriesTally {
    /// Games won by the AI tier.
    ai_wins: u32,
    /// Games won by the opponent tier.
    opponent_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SeriesTally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.ai_wins + self.opponent_wins + self.draws
    }
}

impl std::fmt::Display for SeriesTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AI wins: {}, opponent wins: {}, draws: {}",
            self.ai_wins, self.opponent_wins, self.draws
        )
    }
}

/// Plays `games` matches of `ai` against `opponent`, alternating who opens.
///
/// The AI tier takes X in even-numbered games and O in odd ones.
#[instrument(skip(rng))]
pub fn play_series(
    ai: Difficulty,
    opponent: Difficulty,
    games: u32,
    rng: &mut dyn RngCore,
) -> Result<SeriesTally, InvalidMoveError> {
    let mut tally = SeriesTally::default();

    for game in 0..games {
        let ai_symbol = if game % 2 == 0 { Symbol::X } else { Symbol::O };
        let (x, o) = match ai_symbol {
            Symbol::X => (ai.strategy(), opponent.strategy()),
            Symbol::O => (opponent.strategy(), ai.strategy()),
        };

        let record = play_match(x, o, rng)?;
        match record.winner {
            Some(symbol) if symbol == ai_symbol => tally.ai_wins += 1,
            Some(_) => tally.opponent_wins += 1,
            None => tally.draws += 1,
        }
    }

    info!(%tally, "Series finished");
    Ok(tally)
}
