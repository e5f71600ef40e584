//! Game sessions.
//!
//! A [`Session`] is the loop collaborator: it owns the history and the RNG,
//! asks its strategy for a move, evaluates the round, and records it.

pub mod config;
pub mod game;

pub use config::SessionConfig;
pub use game::Session;
