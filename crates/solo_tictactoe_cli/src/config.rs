//! Optional TOML settings for the terminal front end.
//!
//! ```toml
//! difficulty = "hard"
//! symbol = "O"
//! seed = 42
//! simulate_games = 500
//! ```
//!
//! Command-line flags take precedence over values from the file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use solo_tictactoe::{Difficulty, Symbol};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings loaded from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty to play at without prompting.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Symbol for the human without prompting.
    #[serde(default)]
    symbol: Option<Symbol>,

    /// Seed for the AI's random moves.
    #[serde(default)]
    seed: Option<u64>,

    /// Games played by `simulate` when `--games` is absent.
    #[serde(default = "default_simulate_games")]
    simulate_games: u32,
}

fn default_simulate_games() -> u32 {
    100
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            symbol: None,
            seed: None,
            simulate_games: default_simulate_games(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            "difficulty = \"hard\"\nsymbol = \"O\"\nseed = 42\nsimulate_games = 500\n",
        );
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.difficulty(), Some(Difficulty::Hard));
        assert_eq!(*config.symbol(), Some(Symbol::O));
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.simulate_games(), 500);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("difficulty = \"easy\"\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.difficulty(), Some(Difficulty::Easy));
        assert_eq!(*config.symbol(), None);
        assert_eq!(*config.simulate_games(), 100);
    }

    #[test]
    fn test_invalid_difficulty_is_rejected() {
        let file = write_config("difficulty = \"nightmare\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_load_without_path_gives_defaults() {
        assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
    }
}
