//! The fixed set of boxes in play.
//!
//! `BoxCollection` knows nothing about rounds or scoring. It stores boxes
//! in positional order, opens them, and shuffles positions. The multiset
//! of values never changes after construction.

use serde::{Deserialize, Serialize};

use super::money_box::MoneyBox;
use crate::core::{GameError, GameRng, Result, ShuffleRange};

/// Ordered, fixed-length collection of boxes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxCollection {
    boxes: Vec<MoneyBox>,
}

impl BoxCollection {
    /// Build one closed box per value, in the given order.
    pub fn new(values: &[f64]) -> Self {
        Self {
            boxes: values.iter().copied().map(MoneyBox::new).collect(),
        }
    }

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True if the collection holds no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    fn get(&self, index: usize) -> Result<&MoneyBox> {
        self.boxes.get(index).ok_or(GameError::OutOfRange {
            index,
            len: self.boxes.len(),
        })
    }

    /// Value of the box at `index`.
    pub fn value_at(&self, index: usize) -> Result<f64> {
        self.get(index).map(MoneyBox::value)
    }

    /// Whether the box at `index` is open.
    pub fn is_open_at(&self, index: usize) -> Result<bool> {
        self.get(index).map(MoneyBox::is_open)
    }

    /// Open the box at `index`. Opening an open box is a no-op.
    pub fn open(&mut self, index: usize) -> Result<()> {
        let len = self.boxes.len();
        let b = self
            .boxes
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index, len })?;
        b.open();
        Ok(())
    }

    /// Number of boxes not yet opened.
    #[must_use]
    pub fn unopened_count(&self) -> usize {
        self.boxes.iter().filter(|b| !b.is_open()).count()
    }

    /// Arithmetic mean of the values of all unopened boxes.
    pub fn average_value_of_unopened(&self) -> Result<f64> {
        let (sum, count) = self
            .boxes
            .iter()
            .filter(|b| !b.is_open())
            .fold((0.0, 0usize), |(sum, count), b| (sum + b.value(), count + 1));

        if count == 0 {
            return Err(GameError::NoUnopenedBoxes);
        }
        Ok(sum / count as f64)
    }

    /// Values still in play, ascending.
    #[must_use]
    pub fn unopened_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self
            .boxes
            .iter()
            .filter(|b| !b.is_open())
            .map(MoneyBox::value)
            .collect();
        values.sort_by(f64::total_cmp);
        values
    }

    /// Perform `swap_count` random pairwise swaps of box positions.
    ///
    /// Each swap draws two independent indices below `range.bound(len)`.
    /// A swap may pick the same index twice or repeat an earlier swap.
    pub fn shuffle(&mut self, swap_count: usize, rng: &mut GameRng, range: ShuffleRange) {
        let bound = range.bound(self.boxes.len());
        if bound == 0 {
            return;
        }

        for _ in 0..swap_count {
            let first = rng.gen_index(bound);
            let second = rng.gen_index(bound);
            self.boxes.swap(first, second);
        }
        tracing::debug!(swaps = swap_count, bound, seed = rng.seed(), "shuffled boxes");
    }

    /// Iterate over boxes in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &MoneyBox> + '_ {
        self.boxes.iter()
    }
}

impl std::fmt::Display for BoxCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.boxes {
            writeln!(f, "{b}")?;
        }
        Ok(())
    }
}
