//! Single-player game session against the AI.

use crate::action::{InvalidMoveError, Move};
use crate::contracts::assert_invariants;
use crate::difficulty::Difficulty;
use crate::phases::{Outcome, SessionPhase};
use crate::rules;
use crate::strategy::MoveStrategy;
use crate::types::{Board, Symbol};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Who a symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    /// The person at the keyboard.
    Human,
    /// The computer opponent.
    Ai,
}

/// Symbols bound to each participant for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Human's symbol.
    human: Symbol,
    /// AI's symbol (always the other one).
    ai: Symbol,
}

impl Assignment {
    /// Binds the human to `human` and the AI to the other symbol.
    pub fn for_human(human: Symbol) -> Self {
        Self {
            human,
            ai: human.opponent(),
        }
    }

    /// Human's symbol.
    pub fn human(&self) -> Symbol {
        self.human
    }

    /// AI's symbol.
    pub fn ai(&self) -> Symbol {
        self.ai
    }

    /// Returns the participant holding `symbol`.
    pub fn participant(&self, symbol: Symbol) -> Participant {
        if symbol == self.human {
            Participant::Human
        } else {
            Participant::Ai
        }
    }
}

/// Read-only view of a session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Current board.
    board: Board,
    /// Lifecycle phase.
    phase: SessionPhase,
    /// Outcome, or `None` while no game has been started.
    outcome: Option<Outcome>,
    /// Who moves next, or `None` when no move is accepted.
    whose_turn: Option<Participant>,
}

/// Result of one human move and the AI reply it triggered.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// Board after both moves.
    board: Board,
    /// Outcome after both moves.
    outcome: Outcome,
    /// The move the human submitted.
    human_move: Move,
    /// The AI's reply, absent when the human move ended the game.
    ai_move: Option<Move>,
}

/// One human-vs-AI game, from symbol choice to a finished board.
///
/// The session is the only writer of its board. Each call is a complete
/// step: a human move and the AI reply are computed on a copy and
/// committed together, so a failed call changes nothing.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    board: Board,
    assignment: Option<Assignment>,
    history: Vec<Move>,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session whose random moves are seeded from the OS.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Creates a session with deterministic random moves.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        info!(%difficulty, "Creating game session");
        Self {
            difficulty,
            board: Board::new(),
            assignment: None,
            history: Vec::new(),
            rng,
        }
    }

    /// Returns the difficulty chosen at creation.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbol assignment, if a game was started.
    pub fn assignment(&self) -> Option<Assignment> {
        self.assignment
    }

    /// Moves played since the last start, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current lifecycle phase, derived from the board.
    pub fn phase(&self) -> SessionPhase {
        self.outcome()
            .map_or(SessionPhase::AwaitingSymbolChoice, SessionPhase::from)
    }

    /// Outcome of the current board, `None` before [`start`](Self::start).
    pub fn outcome(&self) -> Option<Outcome> {
        self.assignment
            .map(|a| rules::outcome(&self.board, a.human, a.ai))
    }

    /// Symbol whose turn it is; X moves whenever the counts are equal.
    fn next_symbol(&self) -> Symbol {
        if self.board.count(Symbol::X) == self.board.count(Symbol::O) {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    /// Participant expected to move next, if moves are accepted.
    pub fn whose_turn(&self) -> Option<Participant> {
        let assignment = self.assignment?;
        (self.phase() == SessionPhase::InProgress)
            .then(|| assignment.participant(self.next_symbol()))
    }

    /// Snapshot for rendering.
    pub fn current_state(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            phase: self.phase(),
            outcome: self.outcome(),
            whose_turn: self.whose_turn(),
        }
    }

    /// Starts a game with the human playing `human`.
    ///
    /// Only accepted while awaiting a symbol choice; a finished or running
    /// game must be [`reset`](Self::reset) first. When the AI holds the
    /// opening symbol it moves immediately and that move is returned.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn start(&mut self, human: Symbol) -> Result<Option<Move>, InvalidMoveError> {
        self.start_with(self.difficulty.strategy(), human)
    }

    fn start_with(
        &mut self,
        strategy: &dyn MoveStrategy,
        human: Symbol,
    ) -> Result<Option<Move>, InvalidMoveError> {
        let phase = self.phase();
        if phase != SessionPhase::AwaitingSymbolChoice {
            warn!(%phase, "Start requested before reset");
            return Err(InvalidMoveError::AlreadyStarted(phase));
        }

        let assignment = Assignment::for_human(human);
        let mut board = Board::new();
        let mut rng = self.rng.clone();

        let opening = if assignment.ai == Symbol::OPENING {
            reply(strategy, &mut board, assignment, &mut rng)?
        } else {
            None
        };

        self.assignment = Some(assignment);
        self.board = board;
        self.rng = rng;
        self.history = opening.into_iter().collect();
        assert_invariants(&self.board);

        info!(?human, ai = ?assignment.ai, ?opening, "Game started");
        Ok(opening)
    }

    /// Plays the human's move at `index` (0-8) and the AI's reply.
    ///
    /// Fails without side effects if the index is out of range, the cell
    /// is occupied, or no game is in progress.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<MoveReport, InvalidMoveError> {
        self.play_turn(self.difficulty.strategy(), index)
    }

    fn play_turn(
        &mut self,
        strategy: &dyn MoveStrategy,
        index: usize,
    ) -> Result<MoveReport, InvalidMoveError> {
        let phase = self.phase();
        let assignment = match self.assignment {
            Some(assignment) if phase == SessionPhase::InProgress => assignment,
            _ => {
                warn!(%phase, "Move submitted outside a game");
                return Err(InvalidMoveError::NotInProgress(phase));
            }
        };
        debug_assert_eq!(self.next_symbol(), assignment.human, "Human moved out of turn");

        let mut board = self.board;
        let mut rng = self.rng.clone();
        let position = board.place_index(index, assignment.human).inspect_err(|e| {
            warn!(error = %e, "Invalid move");
        })?;
        let human_move = Move::new(assignment.human, position);
        let ai_move = reply(strategy, &mut board, assignment, &mut rng)?;

        self.board = board;
        self.rng = rng;
        self.history.push(human_move);
        self.history.extend(ai_move);
        assert_invariants(&self.board);

        let outcome = rules::outcome(&self.board, assignment.human, assignment.ai);
        info!(%human_move, ?ai_move, ?outcome, "Turn completed");

        Ok(MoveReport {
            board: self.board,
            outcome,
            human_move,
            ai_move,
        })
    }

    /// Abandons the current game and waits for a new symbol choice.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting session");
        self.assignment = None;
        self.board = Board::new();
        self.history.clear();
    }
}

/// Computes and applies the AI's reply on `board`, if the game is still
/// running.
///
/// A strategy that names an occupied cell fails the whole step, so the
/// caller discards the human move along with it.
fn reply(
    strategy: &dyn MoveStrategy,
    board: &mut Board,
    assignment: Assignment,
    rng: &mut StdRng,
) -> Result<Option<Move>, InvalidMoveError> {
    if rules::outcome(board, assignment.human, assignment.ai).is_terminal() {
        return Ok(None);
    }

    let Some(position) = strategy.choose(*board, assignment.ai, assignment.human, rng) else {
        return Ok(None);
    };
    board.place(position, assignment.ai).inspect_err(|e| {
        error!(strategy = strategy.name(), error = %e, "Strategy chose an unavailable cell");
    })?;
    debug!(strategy = strategy.name(), %position, "AI moved");
    Ok(Some(Move::new(assignment.ai, position)))
}
