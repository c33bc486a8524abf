//! Game-state engine: round progression, bank offers, end-of-game
//! decisions and the high score.
//!
//! A view owns one [`GameEngine`] per session and drives it through its
//! operations. The engine is single-owner and not synchronized.

mod game;
mod phase;

pub use game::{GameEngine, GameSnapshot};
pub use phase::{Decision, GameOutcome, GamePhase};
