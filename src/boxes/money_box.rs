//! A single briefcase.

use serde::{Deserialize, Serialize};

/// A briefcase holding a fixed monetary value.
///
/// Boxes start closed. Once opened they stay open.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoneyBox {
    value: f64,
    open: bool,
}

impl MoneyBox {
    /// Create a closed box holding `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, open: false }
    }

    /// The monetary value inside.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Has the box been opened?
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open the box. Opening twice has no further effect.
    pub fn open(&mut self) {
        self.open = true;
    }
}

impl std::fmt::Display for MoneyBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Open: {} Value: {}", self.open, self.value)
    }
}
