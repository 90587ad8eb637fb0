//! Tic-tac-toe against the computer, in the terminal.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;
mod simulate;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use play::PlayOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset; rejected moves log at `warn`.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Rules => {
            println!("{}", solo_tictactoe::RULES);
            Ok(())
        }
        Command::Play {
            difficulty,
            symbol,
            seed,
            config,
        } => {
            let file = GameConfig::load(config.as_deref()).context("Failed to load config")?;
            let options = PlayOptions {
                difficulty: difficulty.or(*file.difficulty()),
                symbol: symbol.or(*file.symbol()),
                seed: seed.or(*file.seed()),
            };
            info!(?options, "Starting interactive play");
            play::run(std::io::stdin().lock(), std::io::stdout().lock(), options)
        }
        Command::Simulate {
            ai,
            opponent,
            games,
            seed,
            config,
        } => {
            let file = GameConfig::load(config.as_deref()).context("Failed to load config")?;
            let games = games.unwrap_or(*file.simulate_games());
            simulate::run(
                std::io::stdout().lock(),
                ai,
                opponent,
                games,
                seed.or(*file.seed()),
            )?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_keeps_warnings() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.to_string(), "warn");
    }
}
