//! History-blind uniform opponent.

use crate::core::{EngineError, GameRng, History, Move};

use super::policy::{uniform_move, Strategy};

/// Picks uniformly at random every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uniform;

impl Strategy for Uniform {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn select(&self, _history: &History, rng: &mut GameRng) -> Result<Move, EngineError> {
        Ok(uniform_move(rng))
    }
}
