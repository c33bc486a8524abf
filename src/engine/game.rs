//! The game-state engine.

use serde::{Deserialize, Serialize};

use super::phase::{GameOutcome, GamePhase};
use crate::boxes::BoxCollection;
use crate::core::{GameConfig, GameError, GameRng, Result};
use crate::score::{FileStore, HighScoreStore};

/// One game session.
///
/// Owns the boxes, round progress, the player's box and the high score.
/// Views drive it through its operations and never touch the
/// `BoxCollection` mutably.
#[derive(Clone, Debug)]
pub struct GameEngine<S: HighScoreStore = FileStore> {
    config: GameConfig,
    boxes: BoxCollection,
    store: S,
    phase: GamePhase,
    player_box: Option<usize>,
    round: usize,
    opened_in_round: usize,
    opened_total: usize,
    high_score: f64,
    outcome: Option<GameOutcome>,
    seed: Option<u64>,
}

impl<S: HighScoreStore> GameEngine<S> {
    /// Set up a new game.
    ///
    /// Validates `config`, builds the boxes in denomination order and
    /// shuffles them unless `config.shuffle` is false. The high score is
    /// loaded from `store`; a store with no record yields 0.0.
    pub fn new(config: GameConfig, store: S) -> Result<Self> {
        config.validate()?;

        let mut boxes = BoxCollection::new(&config.denominations);
        let seed = if config.shuffle {
            let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
            boxes.shuffle(config.swap_count, &mut rng, config.shuffle_range);
            Some(rng.seed())
        } else {
            None
        };

        let high_score = store.load()?.unwrap_or(0.0);
        tracing::debug!(boxes = boxes.len(), high_score, ?seed, "game set up");

        Ok(Self {
            config,
            boxes,
            store,
            phase: GamePhase::ChoosingPlayerBox,
            player_box: None,
            round: 1,
            opened_in_round: 0,
            opened_total: 0,
            high_score,
            outcome: None,
            seed,
        })
    }

    /// Standard game with boxes left in denomination order.
    pub fn testing(store: S) -> Result<Self> {
        Self::new(GameConfig::testing(), store)
    }

    // === Queries ===

    /// Configuration this game was set up with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the boxes.
    #[must_use]
    pub fn boxes(&self) -> &BoxCollection {
        &self.boxes
    }

    /// The store backing the high score.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Seed used by the setup shuffle, `None` when unshuffled.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn has_chosen_box(&self) -> bool {
        self.player_box.is_some()
    }

    /// Index of the player's box, once chosen.
    #[must_use]
    pub fn player_box(&self) -> Option<usize> {
        self.player_box
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn boxes_opened_this_round(&self) -> usize {
        self.opened_in_round
    }

    #[must_use]
    pub fn boxes_opened_total(&self) -> usize {
        self.opened_total
    }

    fn scheduled_this_round(&self) -> usize {
        self.config.schedule.boxes_in_round(self.round).unwrap_or(0)
    }

    /// Boxes still to open before the round's offer.
    #[must_use]
    pub fn boxes_remaining_this_round(&self) -> i64 {
        self.scheduled_this_round() as i64 - self.opened_in_round as i64
    }

    /// True once exactly the round's quota of boxes has been opened.
    #[must_use]
    pub fn is_end_of_round(&self) -> bool {
        self.opened_in_round == self.scheduled_this_round()
    }

    pub fn value_in_box(&self, index: usize) -> Result<f64> {
        self.boxes.value_at(index)
    }

    pub fn is_box_open_at(&self, index: usize) -> Result<bool> {
        self.boxes.is_open_at(index)
    }

    /// Value in the player's box. Reads box 0 until a box is chosen.
    pub fn player_box_value(&self) -> Result<f64> {
        self.boxes.value_at(self.player_box.unwrap_or(0))
    }

    /// The bank's offer: unopened average scaled by round progress.
    pub fn current_offer(&self) -> Result<f64> {
        let average = self.boxes.average_value_of_unopened()?;
        Ok(average * self.round as f64 / self.config.schedule.rounds() as f64)
    }

    /// First unopened box other than the player's.
    #[must_use]
    pub fn last_other_box(&self) -> Option<usize> {
        let player = self.player_box?;
        self.boxes
            .iter()
            .enumerate()
            .find(|&(i, b)| i != player && !b.is_open())
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn high_score(&self) -> f64 {
        self.high_score
    }

    /// How the game ended, once over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    // === Box selection ===

    /// Designate the player's box. The box stays closed and does not
    /// count toward the round.
    pub fn choose_player_box(&mut self, index: usize) -> Result<()> {
        self.expect_phase(
            matches!(self.phase, GamePhase::ChoosingPlayerBox),
            "choose the player's box",
        )?;
        self.boxes.value_at(index)?;

        self.player_box = Some(index);
        self.phase = GamePhase::OpeningBoxes { round: self.round };
        tracing::debug!(index, "player chose box");
        Ok(())
    }

    /// Open a box for the current round.
    ///
    /// Reaching the round's quota moves the game to
    /// [`GamePhase::AwaitingOfferDecision`].
    pub fn open_box(&mut self, index: usize) -> Result<()> {
        self.expect_phase(
            matches!(self.phase, GamePhase::OpeningBoxes { .. }),
            "open a box",
        )?;
        if self.boxes.is_open_at(index)? {
            return Err(GameError::BoxAlreadyOpen(index));
        }
        if self.player_box == Some(index) {
            return Err(GameError::PlayerBox(index));
        }

        let value = self.boxes.value_at(index)?;
        self.boxes.open(index)?;
        self.opened_in_round += 1;
        self.opened_total += 1;
        tracing::debug!(
            index,
            value,
            remaining = self.boxes_remaining_this_round(),
            "opened box"
        );

        if self.is_end_of_round() {
            self.phase = GamePhase::AwaitingOfferDecision { round: self.round };
            tracing::info!(round = self.round, offer = ?self.current_offer().ok(), "round complete");
        }
        Ok(())
    }

    /// Choose the player's box on the first call, open a box afterwards.
    pub fn select_box(&mut self, index: usize) -> Result<()> {
        if self.has_chosen_box() {
            self.open_box(index)
        } else {
            self.choose_player_box(index)
        }
    }

    // === Round progression ===

    /// Start the next round.
    pub fn advance_round(&mut self) -> Result<()> {
        match self.phase {
            GamePhase::AwaitingOfferDecision { .. } => {}
            GamePhase::OpeningBoxes { .. } => {
                return Err(GameError::RoundIncomplete {
                    remaining: self.boxes_remaining_this_round(),
                })
            }
            phase => {
                return Err(GameError::InvalidPhase {
                    operation: "advance the round",
                    phase,
                })
            }
        }
        if self.round >= self.config.schedule.rounds() {
            return Err(GameError::NoMoreRounds { round: self.round });
        }

        self.round += 1;
        self.opened_in_round = 0;
        self.phase = GamePhase::OpeningBoxes { round: self.round };
        tracing::info!(round = self.round, "round started");
        Ok(())
    }

    // === Decisions ===

    /// Take the bank's offer and end the game.
    pub fn accept_offer(&mut self) -> Result<GameOutcome> {
        self.expect_phase(
            matches!(self.phase, GamePhase::AwaitingOfferDecision { .. }),
            "accept the offer",
        )?;
        let outcome = GameOutcome::deal(self.current_offer()?, self.player_box_value()?);
        Ok(self.finish(outcome))
    }

    /// Turn down the bank's offer.
    ///
    /// Continues to the next round, or to the final swap decision when a
    /// single other box is left or the schedule has no rounds left. If no
    /// other box is left at all the player keeps their box and the game ends.
    pub fn reject_offer(&mut self) -> Result<GamePhase> {
        self.expect_phase(
            matches!(self.phase, GamePhase::AwaitingOfferDecision { .. }),
            "reject the offer",
        )?;

        let others_left = self.boxes.unopened_count().saturating_sub(1);
        if others_left == 0 {
            let outcome = GameOutcome::kept(self.player_box_value()?, None);
            self.finish(outcome);
        } else if others_left == 1 || self.round >= self.config.schedule.rounds() {
            self.phase = GamePhase::AwaitingFinalSwapDecision;
            tracing::info!(round = self.round, "final swap decision");
        } else {
            self.advance_round()?;
        }
        Ok(self.phase)
    }

    /// Keep the player's box at the final decision.
    pub fn keep_box(&mut self) -> Result<GameOutcome> {
        let (player, other) = self.final_values("keep the box")?;
        Ok(self.finish(GameOutcome::kept(player, Some(other))))
    }

    /// Swap the player's box for the last other box at the final decision.
    pub fn swap_box(&mut self) -> Result<GameOutcome> {
        let (player, other) = self.final_values("swap the box")?;
        Ok(self.finish(GameOutcome::swapped(player, other)))
    }

    fn final_values(&self, operation: &'static str) -> Result<(f64, f64)> {
        self.expect_phase(
            matches!(self.phase, GamePhase::AwaitingFinalSwapDecision),
            operation,
        )?;
        let other = self.last_other_box().ok_or(GameError::NoUnopenedBoxes)?;
        Ok((self.player_box_value()?, self.boxes.value_at(other)?))
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        self.phase = GamePhase::GameOver;
        self.outcome = Some(outcome);
        tracing::info!(
            decision = ?outcome.decision,
            winnings = outcome.winnings,
            good_deal = outcome.good_deal,
            "game over"
        );
        outcome
    }

    fn expect_phase(&self, allowed: bool, operation: &'static str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    // === High score ===

    /// Persist `value` if it beats the high score. Ties are not records.
    ///
    /// NaN and infinite values are never records: the store could not
    /// read them back.
    ///
    /// The in-memory high score only changes after the store accepts the
    /// write.
    pub fn record_if_high_score(&mut self, value: f64) -> Result<bool> {
        if !value.is_finite() || !(value > self.high_score) {
            return Ok(false);
        }

        self.store.save(value)?;
        tracing::info!(previous = self.high_score, value, "new high score");
        self.high_score = value;
        Ok(true)
    }

    /// Everything a view needs to render the game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            round: self.round,
            player_box: self.player_box,
            boxes_opened_this_round: self.opened_in_round,
            boxes_remaining_this_round: self.boxes_remaining_this_round(),
            boxes_opened_total: self.opened_total,
            open: self.boxes.iter().map(|b| b.is_open()).collect(),
            values_in_play: self.boxes.unopened_values(),
            current_offer: self.current_offer().ok(),
            high_score: self.high_score,
            outcome: self.outcome,
        }
    }
}

/// Serializable view of a game for rendering.
///
/// Values still in play are listed without their positions, so closed
/// boxes stay hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub round: usize,
    pub player_box: Option<usize>,
    pub boxes_opened_this_round: usize,
    pub boxes_remaining_this_round: i64,
    pub boxes_opened_total: usize,
    /// Open flag per box position.
    pub open: Vec<bool>,
    /// Values still in play, ascending.
    pub values_in_play: Vec<f64>,
    pub current_offer: Option<f64>,
    pub high_score: f64,
    pub outcome: Option<GameOutcome>,
}
