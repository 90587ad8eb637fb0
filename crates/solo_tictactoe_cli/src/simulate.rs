//! Tier-vs-tier series.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use solo_tictactoe::{Difficulty, SeriesTally, play_series};
use std::io::Write;
use tracing::instrument;

/// Plays `games` matches and writes the tally to `output`.
#[instrument(skip(output))]
pub fn run<W: Write>(
    mut output: W,
    ai: Difficulty,
    opponent: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<SeriesTally> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let tally = play_series(ai, opponent, games, &mut rng)
        .with_context(|| format!("{ai} vs {opponent} series failed"))?;

    writeln!(output, "{ai} vs {opponent} over {games} games")?;
    writeln!(output, "{tally}")?;
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_tally() {
        let mut output = Vec::new();
        let tally = run(&mut output, Difficulty::Hard, Difficulty::Easy, 10, Some(9)).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Hard vs Easy over 10 games"));
        assert_eq!(tally.games(), 10);
        assert_eq!(*tally.opponent_wins(), 0);
    }
}
