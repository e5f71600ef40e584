//! The three moves and the cyclic beats-relation between them.
//!
//! ## Beats Relation
//!
//! Each move is defeated by exactly one other move:
//! - Rock is beaten by Paper
//! - Paper is beaten by Scissors
//! - Scissors is beaten by Rock
//!
//! The relation is a single 3-cycle with no fixed points. `Move::beaten_by`
//! is the only place it is written down; the evaluator and the strategies
//! both go through it.
//!
//! ## Usage
//!
//! ```
//! use rust_rps::core::Move;
//!
//! assert_eq!(Move::Rock.beaten_by(), Move::Paper);
//! assert!(Move::Paper.beats(Move::Rock));
//!
//! // Parse from user input: index, name, or initial
//! assert_eq!("1".parse::<Move>().unwrap(), Move::Paper);
//! assert_eq!("scissors".parse::<Move>().unwrap(), Move::Scissors);
//! assert_eq!("r".parse::<Move>().unwrap(), Move::Rock);
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// A rock-paper-scissors move.
///
/// Ordered only for enumeration: Rock (0), Paper (1), Scissors (2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in enumeration order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Number of distinct moves.
    pub const COUNT: usize = 3;

    /// The move that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Does this move defeat `other`?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        other.beaten_by() == self
    }

    /// Enumeration index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Move at the given enumeration index.
    ///
    /// Returns `None` outside `0..3`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Move> {
        match index {
            0 => Some(Move::Rock),
            1 => Some(Move::Paper),
            2 => Some(Move::Scissors),
            _ => None,
        }
    }

    /// The moves other than this one, in enumeration order.
    pub fn others(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |m| *m != self)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// The verb used when this move defeats the move it beats.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Move::Rock => "crushes",
            Move::Paper => "covers",
            Move::Scissors => "cut",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Move {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::from_index(value as usize).ok_or_else(|| EngineError::InvalidMove(value.to_string()))
    }
}

impl std::str::FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u8>() {
            return Move::try_from(index);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            _ => Err(EngineError::InvalidMove(trimmed.to_string())),
        }
    }
}
