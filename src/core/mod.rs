//! Core types: RNG, configuration, errors.
//!
//! These are game-rule agnostic. The standard game's constants live in
//! `config` and are only consumed through `GameConfig`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    GameConfig, RoundSchedule, ShuffleRange, BOXES_IN_ROUND, BOX_SWAPS, BOX_VALUES,
    HIGH_SCORE_FILE, NUM_BOXES, NUM_ROUNDS,
};
pub use error::{ConfigError, GameError, Result, StoreError};
pub use rng::{GameRng, GameRngState};
