//! Error types.
//!
//! Every fallible operation returns a [`GameError`]. Failures are local to
//! the call that produced them: no engine or collection state is mutated
//! before the operation knows it will succeed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::GamePhase;

/// Result alias used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Errors raised by box and engine operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("box index {index} is out of range for {len} boxes")]
    OutOfRange { index: usize, len: usize },

    #[error("every box is open, so there is no unopened average")]
    NoUnopenedBoxes,

    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: GamePhase,
    },

    #[error("box {0} is already open")]
    BoxAlreadyOpen(usize),

    #[error("box {0} is the player's box")]
    PlayerBox(usize),

    #[error("round is not over: {remaining} boxes left to open")]
    RoundIncomplete { remaining: i64 },

    #[error("round {round} is the last scheduled round")]
    NoMoreRounds { round: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Invalid [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least two boxes are required, got {0}")]
    TooFewBoxes(usize),

    #[error("denomination {value} at position {index} is not a non-negative amount")]
    InvalidDenomination { index: usize, value: f64 },

    #[error("round {0} opens no boxes")]
    EmptyRound(usize),

    #[error("schedule opens {scheduled} boxes but only {available} can be opened")]
    ScheduleTooLong { scheduled: usize, available: usize },
}

/// High-score store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read high score from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write high score to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("high score record at {} is not a number: {contents:?}", path.display())]
    Corrupt { path: PathBuf, contents: String },
}
