//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use solo_tictactoe::{Difficulty, Symbol};
use std::path::PathBuf;

/// Tic-tac-toe against an AI with three difficulty tiers
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the game rules
    Rules,

    /// Play an interactive game in the terminal
    Play {
        /// Difficulty (easy, intermediate, hard). Prompted for if omitted.
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Your symbol (x or o). X always moves first.
        #[arg(short, long)]
        symbol: Option<Symbol>,

        /// Seed for the AI's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML file with default settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Pit two difficulty tiers against each other
    Simulate {
        /// Tier whose results are reported as "AI"
        #[arg(long, default_value = "hard")]
        ai: Difficulty,

        /// Opposing tier
        #[arg(long, default_value = "easy")]
        opponent: Difficulty,

        /// Number of games (the AI alternates between X and O)
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML file with default settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
