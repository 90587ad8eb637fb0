//! Core domain types for tic-tac-toe.

use crate::action::InvalidMoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark a participant plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// X (always opens).
    X,
    /// O (moves second).
    O,
}

impl Symbol {
    /// The symbol that makes the first move of every game.
    pub const OPENING: Symbol = Symbol::X;

    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a symbol.
    Occupied(Symbol),
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: strategies work on their own snapshots and
/// never touch the board owned by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Marks an empty cell.
    ///
    /// The board is left untouched when the cell is already occupied.
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> Result<(), InvalidMoveError> {
        if !self.is_empty(pos) {
            return Err(InvalidMoveError::Occupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(symbol);
        Ok(())
    }

    /// Marks the cell at a raw index (0-8).
    #[instrument(skip(self))]
    pub fn place_index(
        &mut self,
        index: usize,
        symbol: Symbol,
    ) -> Result<Position, InvalidMoveError> {
        let pos = Position::try_from(index)?;
        self.place(pos, symbol)?;
        Ok(pos)
    }

    /// Returns a copy of this board with one more mark.
    pub fn with_mark(mut self, pos: Position, symbol: Symbol) -> Result<Self, InvalidMoveError> {
        self.place(pos, symbol)?;
        Ok(self)
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of cells marked by `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(symbol))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their index so a player can type it back.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let mark = match self.get(pos) {
                Cell::Empty => pos.to_index().to_string(),
                Cell::Occupied(s) => s.to_string(),
            };
            result.push_str(&mark);
            if pos.col() < 2 {
                result.push('|');
            } else if pos.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
