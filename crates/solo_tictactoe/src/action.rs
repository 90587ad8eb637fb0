//! Moves and move errors.

use crate::phases::SessionPhase;
use crate::position::Position;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self { symbol, position }
    }

    /// Returns the symbol placed by this move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

/// A move that cannot be applied.
///
/// Always recoverable: the rejected operation changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell is already marked.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The session does not accept moves in its current phase.
    #[display("No game in progress ({})", _0)]
    NotInProgress(#[error(not(source))] SessionPhase),

    /// A game was already started; reset before starting another.
    #[display("A game has already started ({}); reset first", _0)]
    AlreadyStarted(#[error(not(source))] SessionPhase),
}
