//! Opponent strategies.
//!
//! ## Overview
//!
//! Every strategy implements [`Strategy`]: given the completed rounds of a
//! session and the session's RNG, pick the opponent's next move.
//!
//! - [`Reactive`]: keyed only on the opponent's own last move and its result
//! - [`Pattern`]: counters the mode of the human's recent moves
//! - [`Uniform`]: ignores history
//!
//! ## Usage
//!
//! ```rust
//! use rust_rps::core::{GameRng, History, Move};
//! use rust_rps::strategy::{Pattern, Strategy};
//!
//! let mut history = History::new();
//! history.record(Move::Rock, Move::Paper);
//!
//! let mut rng = GameRng::new(42);
//! let next = Pattern::default().select(&history, &mut rng).unwrap();
//! assert_eq!(next, Move::Paper);
//! ```

pub mod pattern;
pub mod policy;
pub mod reactive;
pub mod uniform;

pub use pattern::{Pattern, DEFAULT_WINDOW};
pub use policy::{uniform_move, Strategy, StrategyKind};
pub use reactive::Reactive;
pub use uniform::Uniform;
