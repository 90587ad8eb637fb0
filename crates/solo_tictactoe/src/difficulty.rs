//! Difficulty tiers and their strategies.

use crate::strategy::{HeuristicStrategy, MoveStrategy, OptimalStrategy, RandomStrategy};
use serde::{Deserialize, Serialize};

/// How hard the AI plays. Fixed for the lifetime of a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// Wins or blocks when it can, otherwise random.
    #[default]
    Intermediate,
    /// Perfect play.
    Hard,
}

impl Difficulty {
    /// Strategy that plays at this tier.
    pub fn strategy(self) -> &'static dyn MoveStrategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Intermediate => &HeuristicStrategy,
            Difficulty::Hard => &OptimalStrategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tier_to_strategy() {
        let names: Vec<_> = Difficulty::iter().map(|d| d.strategy().name()).collect();
        assert_eq!(names, ["random", "heuristic", "optimal"]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Difficulty::from_str("hard"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("EASY"), Ok(Difficulty::Easy));
        assert!(Difficulty::from_str("impossible").is_err());
    }
}
