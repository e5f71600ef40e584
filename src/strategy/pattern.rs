//! Recent-pattern strategy.
//!
//! Looks at the human's last `window` moves, finds the most frequent one,
//! and plays the move that beats it.
//!
//! ## Ties
//!
//! When several moves share the highest count, the one that appears first
//! in the window (oldest to newest) wins the tie. `[Paper, Rock, Rock, Paper]`
//! has mode `Paper`.

use crate::core::{EngineError, GameRng, History, Move};

use super::policy::{uniform_move, Strategy};

/// Default number of recent human moves considered.
pub const DEFAULT_WINDOW: usize = 5;

/// Counter-the-mode opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    window: usize,
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl Pattern {
    /// Create a pattern strategy over the last `window` human moves.
    pub fn new(window: usize) -> Result<Self, EngineError> {
        if window == 0 {
            return Err(EngineError::InvalidWindow(window));
        }
        Ok(Self { window })
    }

    /// Window size.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Most frequent move, ties going to the earliest in `moves`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn mode(moves: &[Move]) -> Option<Move> {
        let mut counts = [0usize; Move::COUNT];
        for m in moves {
            counts[m.index()] += 1;
        }
        let max = counts.iter().copied().max()?;
        moves.iter().copied().find(|m| counts[m.index()] == max)
    }

    /// Select the next move from the human's move history (oldest first).
    pub fn select_move(&self, human_moves: &[Move], rng: &mut GameRng) -> Move {
        let start = human_moves.len().saturating_sub(self.window);
        let recent = &human_moves[start..];

        match Self::mode(recent) {
            Some(mode) => {
                let counter = mode.beaten_by();
                log::debug!(
                    "pattern: mode of last {} is {}, playing {}",
                    recent.len(),
                    mode,
                    counter
                );
                counter
            }
            None => {
                log::debug!("pattern: no history, uniform");
                uniform_move(rng)
            }
        }
    }
}

impl Strategy for Pattern {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn select(&self, history: &History, rng: &mut GameRng) -> Result<Move, EngineError> {
        Ok(self.select_move(&history.recent_human_moves(self.window), rng))
    }
}
