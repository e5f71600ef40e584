//! One game session: the owner of history, RNG, and the chosen strategy.
//!
//! Each round runs strictly in order: strategy picks from completed history,
//! the evaluator scores the round, the round is appended.

use crate::core::{EngineError, GameRng, History, Move, Round, Score};
use crate::strategy::Strategy;

use super::config::SessionConfig;

/// A single game session.
///
/// Owns its history and RNG, so sessions never interfere with each other.
pub struct Session {
    /// Configuration the session was built from.
    /// `None` when a custom strategy was supplied directly.
    config: Option<SessionConfig>,

    /// Opponent strategy, fixed for the session's lifetime.
    strategy: Box<dyn Strategy>,

    /// Completed rounds.
    history: History,

    /// RNG for opponent decisions.
    rng: GameRng,
}

impl Session {
    /// Start a session.
    ///
    /// Fails if the configuration names an invalid pattern window.
    pub fn new(config: SessionConfig) -> Result<Self, EngineError> {
        let strategy = config.strategy.build(config.window)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        log::info!(
            "session start: strategy={} window={} seed={}",
            config.strategy,
            config.window,
            rng.seed()
        );

        Ok(Self {
            config: Some(config),
            strategy,
            history: History::new(),
            rng,
        })
    }

    /// Start a session with a custom strategy.
    pub fn with_strategy<S: Strategy + 'static>(strategy: S, seed: u64) -> Self {
        log::info!("session start: strategy={} seed={}", strategy.name(), seed);
        Self {
            config: None,
            strategy: Box::new(strategy),
            history: History::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Play one round against `human`.
    ///
    /// The strategy is consulted before `human` is used, and only with
    /// rounds already completed.
    pub fn play_round(&mut self, human: Move) -> Result<Round, EngineError> {
        let opponent = self.strategy.select(&self.history, &mut self.rng)?;
        Ok(self.history.record(human, opponent))
    }

    /// Completed rounds.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Tally so far.
    #[must_use]
    pub fn score(&self) -> Score {
        self.history.score()
    }

    /// Seed actually in use; replaying with it reproduces the opponent.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Name of the committed strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Configuration the session was built from, if it came from one.
    #[must_use]
    pub fn config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::strategy::{Reactive, StrategyKind};

    /// Always plays the same move.
    struct Fixed(Move);

    impl Strategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn select(&self, _history: &History, _rng: &mut GameRng) -> Result<Move, EngineError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_play_round_appends() {
        let mut session = Session::with_strategy(Fixed(Move::Rock), 1);

        let round = session.play_round(Move::Paper).unwrap();
        assert_eq!(round.opponent(), Move::Rock);
        assert_eq!(round.outcome(), Outcome::Win);

        session.play_round(Move::Scissors).unwrap();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.score().wins, 1);
        assert_eq!(session.score().losses, 1);
        assert_eq!(session.strategy_name(), "fixed");
    }

    #[test]
    fn test_new_rejects_zero_window() {
        let config = SessionConfig::default().with_window(0);
        assert_eq!(Session::new(config).err(), Some(EngineError::InvalidWindow(0)));
    }

    #[test]
    fn test_seed_recorded() {
        let session = Session::new(SessionConfig::default().with_seed(77)).unwrap();
        assert_eq!(session.seed(), 77);
    }

    #[test]
    fn test_entropy_seed_replays() {
        let config = SessionConfig::default().with_strategy(StrategyKind::Reactive);
        let mut original = Session::new(config.clone()).unwrap();
        assert_eq!(original.config().and_then(|c| c.seed), None);

        let mut replay = Session::new(config.with_seed(original.seed())).unwrap();
        for m in [Move::Rock, Move::Rock, Move::Paper, Move::Scissors, Move::Paper] {
            original.play_round(m).unwrap();
            replay.play_round(m).unwrap();
        }
        assert_eq!(original.history().opponent_moves(), replay.history().opponent_moves());
    }

    #[test]
    fn test_custom_strategy_has_no_config() {
        let session = Session::with_strategy(Reactive, 3);
        assert_eq!(session.strategy_name(), "reactive");
        assert!(session.config().is_none());
        assert_eq!(session.seed(), 3);
    }

    #[test]
    fn test_config_strategy_used() {
        let config = SessionConfig::default()
            .with_strategy(StrategyKind::Reactive)
            .with_seed(5);
        let session = Session::new(config).unwrap();
        assert_eq!(session.strategy_name(), "reactive");
        assert_eq!(session.config().map(|c| c.strategy), Some(StrategyKind::Reactive));
    }
}
