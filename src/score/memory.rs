//! In-memory high-score store.

use std::cell::Cell;
use std::rc::Rc;

use super::HighScoreStore;
use crate::core::StoreError;

/// High-score slot shared by every clone of the handle.
///
/// Engines built from clones of one `MemoryStore` see each other's
/// records, the same way they would through a shared file.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<Cell<Option<f64>>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `score`.
    #[must_use]
    pub fn with_score(score: f64) -> Self {
        Self {
            slot: Rc::new(Cell::new(Some(score))),
        }
    }

    /// Current record, if any.
    #[must_use]
    pub fn get(&self) -> Option<f64> {
        self.slot.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        Ok(self.slot.get())
    }

    fn save(&mut self, score: f64) -> Result<(), StoreError> {
        self.slot.set(Some(score));
        Ok(())
    }
}
