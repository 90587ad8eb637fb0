//! Interactive line-based game loop.
//!
//! The loop owns the [`GameSession`] and passes it explicitly through
//! every step. Reading and writing are generic so the loop runs against
//! scripted input in tests.

use anyhow::{Context, Result};
use solo_tictactoe::{Difficulty, GameSession, Outcome, Position, RULES, Symbol};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Settings fixed before the first game.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Difficulty for the first game; prompted for when absent.
    pub difficulty: Option<Difficulty>,
    /// Human symbol for every game; prompted for when absent.
    pub symbol: Option<Symbol>,
    /// Seed for the AI's random moves.
    pub seed: Option<u64>,
}

/// What the player asked for at a prompt.
enum Command<T> {
    Value(T),
    Menu,
    Quit,
}

/// Line-oriented terminal.
struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write to terminal")
    }

    /// Prompts until `parse` accepts the answer. End of input counts as quit.
    fn ask<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> Result<Command<T>> {
        loop {
            write!(self.output, "{prompt} ").context("Failed to write to terminal")?;
            self.output.flush().context("Failed to flush terminal")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from terminal")?;
            if read == 0 {
                debug!("End of input");
                return Ok(Command::Quit);
            }

            match line.trim().to_lowercase().as_str() {
                "q" | "quit" => return Ok(Command::Quit),
                "m" | "menu" => return Ok(Command::Menu),
                answer => match parse(answer) {
                    Ok(value) => return Ok(Command::Value(value)),
                    Err(message) => self.say(message)?,
                },
            }
        }
    }
}

fn parse_difficulty(answer: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(answer).map_err(|_| format!("Unknown mode '{answer}'"))
}

fn parse_symbol(answer: &str) -> Result<Symbol, String> {
    Symbol::from_str(answer).map_err(|_| format!("Pick X or O, not '{answer}'"))
}

fn parse_position(answer: &str) -> Result<Position, String> {
    Position::from_label_or_number(answer)
        .ok_or_else(|| format!("'{answer}' is not a cell; use 0-8 or a name like 'center'"))
}

/// Runs menus and games until the player quits or input ends.
#[instrument(skip(input, output))]
pub fn run<R: BufRead, W: Write>(input: R, output: W, options: PlayOptions) -> Result<()> {
    let mut term = Terminal { input, output };
    let mut preset = options.difficulty;

    term.say("Tic Tac Toe")?;
    term.say(RULES)?;

    loop {
        let difficulty = match preset.take() {
            Some(difficulty) => difficulty,
            None => match term.ask("Select mode (easy / intermediate / hard):", parse_difficulty)? {
                Command::Value(difficulty) => difficulty,
                Command::Menu => continue,
                Command::Quit => return Ok(()),
            },
        };

        let mut session = match options.seed {
            Some(seed) => GameSession::with_seed(difficulty, seed),
            None => GameSession::new(difficulty),
        };
        term.say(format_args!("Mode: {difficulty}"))?;

        match play_mode(&mut term, &mut session, options.symbol)? {
            Command::Menu => {
                session.reset();
                info!("Back to mode selection");
            }
            Command::Quit | Command::Value(()) => return Ok(()),
        }
    }
}

/// Plays games at one difficulty until the player leaves the mode.
fn play_mode<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    session: &mut GameSession,
    symbol: Option<Symbol>,
) -> Result<Command<()>> {
    loop {
        let human = match symbol {
            Some(symbol) => symbol,
            None => match term.ask("Choose your symbol (X moves first):", parse_symbol)? {
                Command::Value(symbol) => symbol,
                Command::Menu => return Ok(Command::Menu),
                Command::Quit => return Ok(Command::Quit),
            },
        };

        if let Some(opening) = session.start(human).context("Failed to start game")? {
            term.say(format_args!("AI opens at {}", opening.position()))?;
        }

        match play_game(term, session)? {
            Command::Value(outcome) => term.say(outcome)?,
            Command::Menu => return Ok(Command::Menu),
            Command::Quit => return Ok(Command::Quit),
        }

        match term.ask("Play again? (y / m for menu / q to quit):", |a| match a {
            "y" | "yes" => Ok(()),
            other => Err(format!("Unknown choice '{other}'")),
        })? {
            Command::Value(()) => session.reset(),
            other => return Ok(other),
        }
    }
}

/// Plays one game to its end.
fn play_game<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    session: &mut GameSession,
) -> Result<Command<Outcome>> {
    loop {
        term.say(session.board())?;

        if let Some(outcome) = session.outcome().filter(Outcome::is_terminal) {
            return Ok(Command::Value(outcome));
        }

        let prompt = "Your move (0-8 or name, m = menu, q = quit):";
        let position = match term.ask(prompt, parse_position)? {
            Command::Value(position) => position,
            Command::Menu => return Ok(Command::Menu),
            Command::Quit => return Ok(Command::Quit),
        };

        match session.submit_human_move(position.to_index()) {
            Ok(report) => {
                if let Some(ai_move) = report.ai_move() {
                    term.say(format_args!("AI plays {}", ai_move.position()))?;
                }
            }
            Err(e) => term.say(e)?,
        }
    }
}
