//! Running tally of round outcomes.

use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// Wins, losses, and draws from the human's perspective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Rounds the human won.
    pub wins: u32,

    /// Rounds the human lost.
    pub losses: u32,

    /// Drawn rounds.
    pub draws: u32,
}

impl Score {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total rounds counted.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of rounds the human won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds() == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds() as f64
        }
    }
}

impl FromIterator<Outcome> for Score {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut score = Score::new();
        for outcome in iter {
            score.record(outcome);
        }
        score
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}W {}L {}D", self.wins, self.losses, self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_score() {
        let score = Score::new();
        assert_eq!(score.rounds(), 0);
        assert_eq!(score.win_rate(), 0.0);
    }

    #[test]
    fn test_record() {
        let score: Score = [Outcome::Win, Outcome::Win, Outcome::Loss, Outcome::Draw]
            .into_iter()
            .collect();

        assert_eq!(score.rounds(), 4);
        assert!((score.win_rate() - 0.5).abs() < 1e-9);
        assert_eq!(format!("{}", score), "2W 1L 1D");
    }
}
