//! The opponent strategy trait and strategy selection.
//!
//! - `Strategy`: pick the opponent's next move from completed history
//! - `StrategyKind`: which strategy a session commits to

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, History, Move};

use super::pattern::Pattern;
use super::reactive::Reactive;
use super::uniform::Uniform;

// =============================================================================
// Strategy
// =============================================================================

/// Policy for choosing the opponent's move.
///
/// Implementations only ever see completed rounds. The human's move for the
/// round being played is not part of the signature, so no strategy can peek.
pub trait Strategy: Send + Sync {
    /// Short identifier for logs and display.
    fn name(&self) -> &'static str;

    /// Choose the opponent's move for the next round.
    fn select(&self, history: &History, rng: &mut GameRng) -> Result<Move, EngineError>;
}

/// Uniform draw over all three moves.
pub fn uniform_move(rng: &mut GameRng) -> Move {
    Move::ALL[rng.gen_range_usize(0..Move::COUNT)]
}

// =============================================================================
// Strategy Selection
// =============================================================================

/// The fixed set of strategies a session can commit to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Win-stay, lose-shift on the opponent's own record.
    Reactive,
    /// Counter the human's most frequent recent move.
    #[default]
    Pattern,
    /// Ignore history entirely.
    Uniform,
}

impl StrategyKind {
    /// All strategy kinds.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Reactive,
        StrategyKind::Pattern,
        StrategyKind::Uniform,
    ];

    /// Instantiate the strategy. `window` is only read by `Pattern`.
    pub fn build(self, window: usize) -> Result<Box<dyn Strategy>, EngineError> {
        Ok(match self {
            StrategyKind::Reactive => Box::new(Reactive),
            StrategyKind::Pattern => Box::new(Pattern::new(window)?),
            StrategyKind::Uniform => Box::new(Uniform),
        })
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Reactive => "reactive",
            StrategyKind::Pattern => "pattern",
            StrategyKind::Uniform => "uniform",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| EngineError::InvalidStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_move_covers_all() {
        let mut rng = GameRng::new(42);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[uniform_move(&mut rng).index()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_build_names() {
        for kind in StrategyKind::ALL {
            let strategy = kind.build(5).unwrap();
            assert_eq!(strategy.name(), kind.as_str());
        }
    }

    #[test]
    fn test_build_rejects_zero_window() {
        assert_eq!(
            StrategyKind::Pattern.build(0).err(),
            Some(EngineError::InvalidWindow(0))
        );
        // Window is irrelevant to the other strategies
        assert!(StrategyKind::Reactive.build(0).is_ok());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Reactive".parse::<StrategyKind>(), Ok(StrategyKind::Reactive));
        assert_eq!("pattern".parse::<StrategyKind>(), Ok(StrategyKind::Pattern));
        assert_eq!(
            "mcts".parse::<StrategyKind>(),
            Err(EngineError::InvalidStrategy("mcts".to_string()))
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&StrategyKind::Uniform).unwrap();
        assert_eq!(json, "\"uniform\"");
        let deserialized: StrategyKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, StrategyKind::Uniform);
    }
}
