//! Round records and the session history.
//!
//! ## Round
//!
//! One completed round: both moves and the evaluated outcome. The outcome is
//! computed by [`evaluate`] when the round is built, so a `Round` can never
//! disagree with the evaluator.
//!
//! ## History
//!
//! Append-only, ordered log of rounds for one session. Backed by an `im`
//! vector: cloning is O(1) and a clone taken earlier is never affected by
//! later appends.
//!
//! Strategies read the parallel sequences (`human_moves`, `opponent_moves`,
//! `outcomes`) or a recent suffix of them; only the session appends.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::outcome::{evaluate, Outcome};
use super::score::Score;

/// A completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    human: Move,
    opponent: Move,
    outcome: Outcome,
}

impl Round {
    /// Build a round, evaluating its outcome.
    #[must_use]
    pub fn new(human: Move, opponent: Move) -> Self {
        Self {
            human,
            opponent,
            outcome: evaluate(human, opponent),
        }
    }

    /// The human's move.
    #[must_use]
    pub fn human(&self) -> Move {
        self.human
    }

    /// The opponent's move.
    #[must_use]
    pub fn opponent(&self) -> Move {
        self.opponent
    }

    /// Outcome from the human's perspective.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Ordered, append-only history of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    rounds: Vector<Round>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed round.
    pub fn push(&mut self, round: Round) {
        log::trace!(
            "round {}: {} vs {} -> {}",
            self.rounds.len() + 1,
            round.human,
            round.opponent,
            round.outcome
        );
        self.rounds.push_back(round);
    }

    /// Build, append, and return a round.
    pub fn record(&mut self, human: Move, opponent: Move) -> Round {
        let round = Round::new(human, opponent);
        self.push(round);
        round
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// True before the first round completes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Round at `index` (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// Most recent round.
    #[must_use]
    pub fn last(&self) -> Option<&Round> {
        self.rounds.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    /// Human moves, oldest to newest.
    #[must_use]
    pub fn human_moves(&self) -> Vec<Move> {
        self.rounds.iter().map(Round::human).collect()
    }

    /// Opponent moves, oldest to newest.
    #[must_use]
    pub fn opponent_moves(&self) -> Vec<Move> {
        self.rounds.iter().map(Round::opponent).collect()
    }

    /// Outcomes (human perspective), oldest to newest.
    #[must_use]
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.rounds.iter().map(Round::outcome).collect()
    }

    /// The last `n` human moves, oldest first. Fewer if the history is shorter.
    #[must_use]
    pub fn recent_human_moves(&self, n: usize) -> Vec<Move> {
        let skip = self.rounds.len().saturating_sub(n);
        self.rounds.iter().skip(skip).map(Round::human).collect()
    }

    /// Tally of outcomes so far.
    #[must_use]
    pub fn score(&self) -> Score {
        self.rounds.iter().map(Round::outcome).collect()
    }
}
