//! High-score persistence.
//!
//! The engine only talks to the [`HighScoreStore`] trait. Two stores ship
//! with the crate:
//!
//! - [`FileStore`]: a text file holding one decimal number
//!   (`highscore.txt` by default)
//! - [`MemoryStore`]: an in-process slot shared between clones
//!
//! A store distinguishes "no record yet" (`Ok(None)`) from a record it
//! could not read (`Err`).

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::StoreError;

/// Durable single-value store for the high score.
pub trait HighScoreStore {
    /// Read the persisted high score, `None` if there is no record.
    fn load(&self) -> Result<Option<f64>, StoreError>;

    /// Replace the persisted high score with `score`.
    fn save(&mut self, score: f64) -> Result<(), StoreError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, score: f64) -> Result<(), StoreError> {
        (**self).save(score)
    }
}
