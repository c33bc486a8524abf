//! Game configuration.
//!
//! The engine never hardcodes denominations or the round schedule - they
//! come from `GameConfig`. The constants below describe the standard game
//! and are what `GameConfig::default()` uses.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of boxes in the standard game.
pub const NUM_BOXES: usize = 26;

/// Box values of the standard game, ascending.
pub const BOX_VALUES: [f64; NUM_BOXES] = [
    0.01, 1.0, 5.0, 10.0, 25.0, 50.0, 75.0, 100.0, 200.0, 300.0, 400.0, 500.0, 750.0, 1000.0,
    5000.0, 10000.0, 25000.0, 50000.0, 75000.0, 100000.0, 200000.0, 300000.0, 400000.0,
    500000.0, 750000.0, 1000000.0,
];

/// Boxes to open in each round. Index 0 is a sentinel so rounds index from 1.
pub const BOXES_IN_ROUND: [usize; NUM_ROUNDS + 1] = [0, 6, 5, 4, 3, 2, 1, 1, 1, 1, 1];

/// Number of rounds in the standard game.
pub const NUM_ROUNDS: usize = 10;

/// Pairwise swaps performed when shuffling during setup.
pub const BOX_SWAPS: usize = 500;

/// File name of the persisted high score.
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Number of boxes to open per round, rounds numbered from 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSchedule {
    counts: Vec<usize>,
}

impl RoundSchedule {
    /// Create a schedule from per-round counts, first round first.
    pub fn new(counts: impl Into<Vec<usize>>) -> Self {
        Self {
            counts: counts.into(),
        }
    }

    /// Boxes to open in `round`, or `None` outside `1..=rounds()`.
    #[must_use]
    pub fn boxes_in_round(&self, round: usize) -> Option<usize> {
        round.checked_sub(1).and_then(|i| self.counts.get(i)).copied()
    }

    /// Number of rounds.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.counts.len()
    }

    /// Boxes opened over the whole schedule.
    #[must_use]
    pub fn total_boxes(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Default for RoundSchedule {
    fn default() -> Self {
        Self::new(&BOXES_IN_ROUND[1..])
    }
}

/// Which positions a shuffle swap may pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleRange {
    /// Every position `0..N`.
    #[default]
    Full,
    /// Positions `0..N-1`: the last box never moves.
    ExcludeLast,
}

impl ShuffleRange {
    /// Exclusive upper bound for swap indices in a collection of `len` boxes.
    #[must_use]
    pub fn bound(self, len: usize) -> usize {
        match self {
            ShuffleRange::Full => len,
            ShuffleRange::ExcludeLast => len.saturating_sub(1),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Box values in their unshuffled order.
    pub denominations: Vec<f64>,

    /// Boxes to open per round.
    pub schedule: RoundSchedule,

    /// Shuffle the boxes during setup. False is the deterministic
    /// testing mode where box `i` holds `denominations[i]`.
    pub shuffle: bool,

    /// Pairwise swaps performed by the setup shuffle.
    pub swap_count: usize,

    /// Positions the setup shuffle may pick.
    pub shuffle_range: ShuffleRange,

    /// RNG seed for the setup shuffle. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            denominations: BOX_VALUES.to_vec(),
            schedule: RoundSchedule::default(),
            shuffle: true,
            swap_count: BOX_SWAPS,
            shuffle_range: ShuffleRange::Full,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Standard game with boxes left in denomination order.
    #[must_use]
    pub fn testing() -> Self {
        Self {
            shuffle: false,
            ..Self::default()
        }
    }

    /// Use custom denominations.
    #[must_use]
    pub fn with_denominations(mut self, denominations: impl Into<Vec<f64>>) -> Self {
        self.denominations = denominations.into();
        self
    }

    /// Use a custom round schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: RoundSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of setup swaps.
    #[must_use]
    pub fn with_swap_count(mut self, swaps: usize) -> Self {
        self.swap_count = swaps;
        self
    }

    /// Set the positions the setup shuffle may pick.
    #[must_use]
    pub fn with_shuffle_range(mut self, range: ShuffleRange) -> Self {
        self.shuffle_range = range;
        self
    }

    /// Number of boxes.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.denominations.len()
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let boxes = self.box_count();
        if boxes < 2 {
            return Err(ConfigError::TooFewBoxes(boxes));
        }

        if let Some((index, &value)) = self
            .denominations
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ConfigError::InvalidDenomination { index, value });
        }

        if self.schedule.rounds() == 0 {
            return Err(ConfigError::EmptyRound(1));
        }
        if let Some(i) = self.schedule.counts.iter().position(|&c| c == 0) {
            return Err(ConfigError::EmptyRound(i + 1));
        }

        // The player's box is never opened by the schedule
        let available = boxes - 1;
        let scheduled = self.schedule.total_boxes();
        if scheduled > available {
            return Err(ConfigError::ScheduleTooLong {
                scheduled,
                available,
            });
        }

        Ok(())
    }
}
