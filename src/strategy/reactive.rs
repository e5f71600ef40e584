//! Reactive self-history strategy.
//!
//! Reacts only to the outcome of the opponent's own last move:
//!
//! | Last outcome (human view) | Next opponent move                       |
//! |---------------------------|------------------------------------------|
//! | none (first round)        | uniform over all three                   |
//! | Win (opponent lost)       | uniform over the two moves not just used |
//! | Loss (opponent won)       | repeat the last move                     |
//! | Draw                      | uniform over all three                   |
//!
//! Only the most recent round matters; older history is ignored.

use smallvec::SmallVec;

use crate::core::{EngineError, GameRng, History, Move, Outcome};

use super::policy::{uniform_move, Strategy};

/// Win-stay, lose-shift-randomly opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reactive;

impl Reactive {
    /// Select the next move from the opponent's own record.
    ///
    /// `outcomes` are from the human's perspective and `own_moves` are this
    /// strategy's past selections, both oldest to newest. Returns
    /// `HistoryMismatch` if their lengths differ.
    pub fn select_move(
        outcomes: &[Outcome],
        own_moves: &[Move],
        rng: &mut GameRng,
    ) -> Result<Move, EngineError> {
        if outcomes.len() != own_moves.len() {
            return Err(EngineError::HistoryMismatch {
                outcomes: outcomes.len(),
                moves: own_moves.len(),
            });
        }

        let (Some(&last_outcome), Some(&last_move)) = (outcomes.last(), own_moves.last()) else {
            log::debug!("reactive: no history, uniform");
            return Ok(uniform_move(rng));
        };

        let choice = match last_outcome {
            Outcome::Win => {
                let candidates: SmallVec<[Move; 3]> = last_move.others().collect();
                match rng.choose(&candidates) {
                    Some(&m) => m,
                    None => last_move.beaten_by(),
                }
            }
            Outcome::Loss => last_move,
            Outcome::Draw => uniform_move(rng),
        };

        log::debug!(
            "reactive: last {} was a {} for the opponent, playing {}",
            last_move,
            last_outcome.reversed(),
            choice
        );
        Ok(choice)
    }
}

impl Strategy for Reactive {
    fn name(&self) -> &'static str {
        "reactive"
    }

    fn select(&self, history: &History, rng: &mut GameRng) -> Result<Move, EngineError> {
        match history.last() {
            Some(round) => Self::select_move(&[round.outcome()], &[round.opponent()], rng),
            None => Self::select_move(&[], &[], rng),
        }
    }
}
