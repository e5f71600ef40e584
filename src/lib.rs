//! # rust-rps
//!
//! A rock-paper-scissors engine with adaptive opponents.
//!
//! ## Design Principles
//!
//! 1. **Closed Types**: Moves and outcomes are enums, so every match is
//!    checked for exhaustiveness.
//!
//! 2. **One Source of Truth**: `Move::beaten_by` defines who wins; the
//!    evaluator and every strategy go through it.
//!
//! 3. **No Peeking**: Strategies see completed rounds only. The human's
//!    current move is not part of any strategy signature.
//!
//! 4. **Session-Scoped State**: History and RNG live in a `Session`, never
//!    in globals, so sessions can run side by side.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, evaluator, rounds, history, score, RNG, errors
//! - `strategy`: Opponent strategies (reactive, pattern, uniform)
//! - `session`: Session configuration and the round loop state

pub mod core;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{evaluate, EngineError, GameRng, History, Move, Outcome, Round, Score};

pub use crate::strategy::{
    Pattern, Reactive, Strategy, StrategyKind, Uniform, DEFAULT_WINDOW,
};

pub use crate::session::{Session, SessionConfig};
