//! # deal-engine
//!
//! Game-state engine for the "Deal or No Deal" briefcase game.
//!
//! A player designates one box to keep, then opens the others round by
//! round. After each round the bank offers the average of the unopened
//! values scaled by round progress. The player takes the deal or plays on;
//! with one other box left they keep their box or swap it. The best
//! outcome ever reached is persisted as the high score.
//!
//! ## Design Principles
//!
//! 1. **Views stay thin**: Presentation layers call engine operations and
//!    render [`GameSnapshot`]. All sequencing rules live in the engine.
//!
//! 2. **Explicit state machine**: Every operation is legal in specific
//!    [`GamePhase`]s and fails with [`GameError::InvalidPhase`] elsewhere,
//!    without mutating anything.
//!
//! 3. **Reproducible setup**: Shuffles draw from a seeded ChaCha8 RNG, so a
//!    game is fully determined by its [`GameConfig`].
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `boxes`: Boxes and the fixed collection holding them
//! - `score`: High-score stores
//! - `engine`: Rounds, offers, decisions, high score
//!
//! ## Example
//!
//! ```
//! use deal_engine::{GameEngine, GamePhase, MemoryStore};
//!
//! let mut game = GameEngine::testing(MemoryStore::new()).unwrap();
//! game.choose_player_box(0).unwrap();
//! for i in 1..=6 {
//!     game.open_box(i).unwrap();
//! }
//!
//! assert!(game.is_end_of_round());
//! assert_eq!(game.phase(), GamePhase::AwaitingOfferDecision { round: 1 });
//!
//! let outcome = game.accept_offer().unwrap();
//! game.record_if_high_score(outcome.winnings).unwrap();
//! ```

pub mod boxes;
pub mod core;
pub mod engine;
pub mod score;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, GameRngState, Result, RoundSchedule,
    ShuffleRange, StoreError,
};

pub use crate::boxes::{BoxCollection, MoneyBox};

pub use crate::engine::{Decision, GameEngine, GameOutcome, GamePhase, GameSnapshot};

pub use crate::score::{FileStore, HighScoreStore, MemoryStore};
