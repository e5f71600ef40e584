//! Session configuration parameters.

use serde::{Deserialize, Serialize};

use crate::strategy::{StrategyKind, DEFAULT_WINDOW};

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Which opponent strategy the session commits to.
    pub strategy: StrategyKind,

    /// Number of recent human moves the pattern strategy inspects.
    /// Ignored by the other strategies. Must be at least 1.
    pub window: usize,

    /// Random seed for the opponent.
    /// `None` draws one at session start; the drawn seed is kept for replay.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            window: DEFAULT_WINDOW,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a new config with a specific strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with a custom pattern window.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
