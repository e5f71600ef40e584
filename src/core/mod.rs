//! Core data model: moves, outcomes, rounds, history, RNG, errors.
//!
//! Everything here is strategy-agnostic. Strategies and the session build
//! on these types but never redefine who beats whom.

pub mod error;
pub mod history;
pub mod moves;
pub mod outcome;
pub mod rng;
pub mod score;

pub use error::EngineError;
pub use history::{History, Round};
pub use moves::Move;
pub use outcome::{evaluate, Outcome};
pub use rng::GameRng;
pub use score::Score;
