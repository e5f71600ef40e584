//! Round outcomes and the evaluator.
//!
//! Outcomes are always reported from the human player's point of view:
//! `Win` means the human won the round.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Result of a single round, from the human's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Human won.
    Win,
    /// Human lost.
    Loss,
    /// Same move on both sides.
    Draw,
}

impl Outcome {
    /// The same round seen from the opponent's side.
    #[must_use]
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => f.write_str("Win"),
            Outcome::Loss => f.write_str("Loss"),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Evaluate a round.
///
/// Pure and total: `Draw` on equal moves, `Win` if the human's move beats
/// the opponent's, `Loss` otherwise.
#[must_use]
pub fn evaluate(human: Move, opponent: Move) -> Outcome {
    if human == opponent {
        Outcome::Draw
    } else if human.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
