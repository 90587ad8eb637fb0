//! Game outcome and session phase.

use serde::{Deserialize, Serialize};

/// Classification of a board from the session's point of view.
///
/// Always derived from the board, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and empty cells remain.
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The AI completed a line.
    AiWin,
    /// Board full without a line.
    Draw,
}

impl Outcome {
    /// Returns true once no further moves are possible.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::HumanWin => write!(f, "You win!"),
            Outcome::AiWin => write!(f, "AI wins!"),
            Outcome::Draw => write!(f, "It's a tie!"),
        }
    }
}

/// Lifecycle phase of a [`GameSession`](crate::GameSession).
///
/// `AwaitingSymbolChoice → InProgress → {HumanWin, AiWin, Draw}`; only a
/// reset leaves a terminal phase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum SessionPhase {
    /// No symbols assigned yet.
    #[display("awaiting symbol choice")]
    AwaitingSymbolChoice,
    /// Moves are accepted.
    #[display("in progress")]
    InProgress,
    /// Finished, human won.
    #[display("human won")]
    HumanWin,
    /// Finished, AI won.
    #[display("AI won")]
    AiWin,
    /// Finished, draw.
    #[display("draw")]
    Draw,
}

impl SessionPhase {
    /// Returns true for the three finished phases.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionPhase::HumanWin | SessionPhase::AiWin | SessionPhase::Draw
        )
    }
}

impl From<Outcome> for SessionPhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => SessionPhase::InProgress,
            Outcome::HumanWin => SessionPhase::HumanWin,
            Outcome::AiWin => SessionPhase::AiWin,
            Outcome::Draw => SessionPhase::Draw,
        }
    }
}
