//! Game phases and end-of-game outcomes.

use serde::{Deserialize, Serialize};

/// Where the game is in its lifecycle.
///
/// ```text
/// ChoosingPlayerBox
///   -> OpeningBoxes(k)
///   -> AwaitingOfferDecision(k)
///   -> OpeningBoxes(k + 1) | AwaitingFinalSwapDecision | GameOver
/// AwaitingFinalSwapDecision -> GameOver
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The player has not designated their box yet.
    ChoosingPlayerBox,
    /// Opening boxes in `round`.
    OpeningBoxes { round: usize },
    /// The round quota is met and the bank's offer stands.
    AwaitingOfferDecision { round: usize },
    /// Offer rejected with one other box left, or with no scheduled
    /// rounds left: keep or swap for the first other closed box.
    AwaitingFinalSwapDecision,
    /// Terminal.
    GameOver,
}

impl GamePhase {
    /// Has the game ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == GamePhase::GameOver
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::ChoosingPlayerBox => write!(f, "choosing the player's box"),
            GamePhase::OpeningBoxes { round } => write!(f, "opening boxes in round {round}"),
            GamePhase::AwaitingOfferDecision { round } => {
                write!(f, "awaiting a decision on the round {round} offer")
            }
            GamePhase::AwaitingFinalSwapDecision => write!(f, "awaiting the final swap decision"),
            GamePhase::GameOver => write!(f, "the game is over"),
        }
    }
}

/// How the player ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Took the bank's offer.
    Deal { offer: f64 },
    /// Kept their own box at the end.
    Kept,
    /// Swapped for the last other box at the end.
    Swapped,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub decision: Decision,
    /// Amount the player walks away with.
    pub winnings: f64,
    /// Value in the player's own box.
    pub player_box_value: f64,
    /// Value in the last other unopened box, if one was left.
    pub other_value: Option<f64>,
    /// Did the player do at least as well as the alternative?
    pub good_deal: bool,
}

impl GameOutcome {
    pub(crate) fn deal(offer: f64, player_box_value: f64) -> Self {
        Self {
            decision: Decision::Deal { offer },
            winnings: offer,
            player_box_value,
            other_value: None,
            good_deal: offer >= player_box_value,
        }
    }

    pub(crate) fn kept(player_box_value: f64, other_value: Option<f64>) -> Self {
        Self {
            decision: Decision::Kept,
            winnings: player_box_value,
            player_box_value,
            other_value,
            good_deal: other_value.is_none_or(|other| player_box_value >= other),
        }
    }

    pub(crate) fn swapped(player_box_value: f64, other_value: f64) -> Self {
        Self {
            decision: Decision::Swapped,
            winnings: other_value,
            player_box_value,
            other_value: Some(other_value),
            good_deal: other_value >= player_box_value,
        }
    }
}
