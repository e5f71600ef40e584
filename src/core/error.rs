//! Engine error type.

/// Errors surfaced by the engine.
///
/// Every core operation is total over well-typed input, so these only
/// occur when a caller hands over something outside the contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A move value outside the closed three-move set.
    InvalidMove(String),
    /// Parallel history sequences of different lengths.
    HistoryMismatch { outcomes: usize, moves: usize },
    /// Pattern window of zero rounds.
    InvalidWindow(usize),
    /// Unknown strategy name.
    InvalidStrategy(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(s) => write!(f, "invalid move: {:?} (expected 0-2, a move name, or r/p/s)", s),
            Self::HistoryMismatch { outcomes, moves } => write!(
                f,
                "history mismatch: {} outcomes but {} opponent moves",
                outcomes, moves
            ),
            Self::InvalidWindow(n) => write!(f, "invalid pattern window: {} (must be at least 1)", n),
            Self::InvalidStrategy(s) => write!(f, "unknown strategy: {:?}", s),
        }
    }
}

impl std::error::Error for EngineError {}
