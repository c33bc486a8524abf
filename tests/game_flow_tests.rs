//! Whole-game integration tests.
//!
//! These drive the engine the way a view would: designate a box, open
//! boxes round by round, answer the bank, and record the result.

use deal_engine::core::{GameConfig, NUM_BOXES, NUM_ROUNDS};
use deal_engine::{Decision, GameEngine, GameError, GamePhase, MemoryStore};

// =============================================================================
// Helpers
// =============================================================================

fn testing_game() -> GameEngine<MemoryStore> {
    GameEngine::testing(MemoryStore::new()).unwrap()
}

/// Open the lowest-indexed closed boxes until the round's offer is made.
fn play_round(game: &mut GameEngine<MemoryStore>) {
    for index in 0..NUM_BOXES {
        if game.is_end_of_round() {
            break;
        }
        if game.player_box() != Some(index) && !game.is_box_open_at(index).unwrap() {
            game.open_box(index).unwrap();
        }
    }
    assert!(game.is_end_of_round());
}

/// Reject every offer until the final keep-or-swap decision.
fn play_to_final_decision(game: &mut GameEngine<MemoryStore>) {
    loop {
        play_round(game);
        if game.reject_offer().unwrap() == GamePhase::AwaitingFinalSwapDecision {
            break;
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Deterministic game: the documented first-round walkthrough.
#[test]
fn test_first_round_walkthrough() {
    let mut game = testing_game();
    assert_eq!(game.value_in_box(0).unwrap(), 0.01);

    game.select_box(0).unwrap();
    assert!(game.has_chosen_box());
    assert!(!game.is_box_open_at(0).unwrap());
    assert_eq!(game.boxes_remaining_this_round(), 6);

    game.select_box(1).unwrap();
    assert_eq!(game.boxes_remaining_this_round(), 5);

    for index in 2..=6 {
        game.select_box(index).unwrap();
    }

    assert_eq!(game.boxes_opened_this_round(), 6);
    assert!(game.is_end_of_round());
    assert_eq!(game.boxes_remaining_this_round(), 0);

    game.advance_round().unwrap();
    assert_eq!(game.round(), 2);
    assert_eq!(game.boxes_remaining_this_round(), 5);
}

/// The bank offer before anything is opened.
#[test]
fn test_opening_offer() {
    let game = testing_game();
    let offer = game.current_offer().unwrap();
    assert!((offer - 13147.75).abs() < 0.01, "offer was {offer}");
}

/// Every round opens exactly its scheduled number of boxes.
#[test]
fn test_round_quotas() {
    let mut game = testing_game();
    game.choose_player_box(12).unwrap();

    let expected = [6, 5, 4, 3, 2, 1, 1, 1, 1];
    for (i, &quota) in expected.iter().enumerate() {
        assert_eq!(game.round(), i + 1);
        assert_eq!(game.boxes_remaining_this_round(), quota as i64);
        play_round(&mut game);
        assert_eq!(game.boxes_opened_this_round(), quota);
        game.reject_offer().unwrap();
    }

    assert_eq!(game.phase(), GamePhase::AwaitingFinalSwapDecision);
    assert_eq!(game.round(), NUM_ROUNDS - 1);
    assert_eq!(game.boxes_opened_total(), 24);
}

/// Keeping the penny box against the million is a bad deal.
#[test]
fn test_keep_to_the_end() {
    let mut game = testing_game();
    game.choose_player_box(0).unwrap();
    play_to_final_decision(&mut game);

    let outcome = game.keep_box().unwrap();
    assert_eq!(outcome.decision, Decision::Kept);
    assert_eq!(outcome.winnings, 0.01);
    assert_eq!(outcome.other_value, Some(1_000_000.0));
    assert!(!outcome.good_deal);

    assert!(game.record_if_high_score(outcome.winnings).unwrap());
    assert_eq!(game.high_score(), 0.01);
}

/// Swapping into the million is a good deal and a new record.
#[test]
fn test_swap_at_the_end() {
    let store = MemoryStore::with_score(500.0);
    let mut game = GameEngine::testing(store.clone()).unwrap();
    game.choose_player_box(0).unwrap();
    play_to_final_decision(&mut game);

    let outcome = game.swap_box().unwrap();
    assert_eq!(outcome.winnings, 1_000_000.0);
    assert!(outcome.good_deal);

    assert!(game.record_if_high_score(outcome.winnings).unwrap());
    assert_eq!(store.get(), Some(1_000_000.0));
}

/// Taking the round-three offer ends the game immediately.
#[test]
fn test_deal_mid_game() {
    let mut game = testing_game();
    game.choose_player_box(25).unwrap();
    play_round(&mut game);
    game.reject_offer().unwrap();
    play_round(&mut game);
    game.reject_offer().unwrap();
    play_round(&mut game);

    let offer = game.current_offer().unwrap();
    let expected = game.boxes().average_value_of_unopened().unwrap() * 3.0 / 10.0;
    assert!((offer - expected).abs() < 1e-9);

    let outcome = game.accept_offer().unwrap();
    assert_eq!(outcome.decision, Decision::Deal { offer });
    assert_eq!(outcome.player_box_value, 1_000_000.0);
    assert!(!outcome.good_deal);
    assert_eq!(game.phase(), GamePhase::GameOver);

    // Nothing moves once the game is over
    assert!(matches!(game.open_box(24), Err(GameError::InvalidPhase { .. })));
    assert!(matches!(game.swap_box(), Err(GameError::InvalidPhase { .. })));
    assert!(matches!(game.advance_round(), Err(GameError::InvalidPhase { .. })));
}

/// The player's box is never opened by normal play, so the offer is
/// always defined.
#[test]
fn test_offer_defined_through_the_whole_game() {
    let mut game = testing_game();
    game.choose_player_box(7).unwrap();

    loop {
        play_round(&mut game);
        assert!(game.current_offer().is_ok());
        if game.reject_offer().unwrap() == GamePhase::AwaitingFinalSwapDecision {
            break;
        }
    }
    assert!(!game.is_box_open_at(7).unwrap());
}

/// Shuffled games follow the same rules and hold the same values.
#[test]
fn test_shuffled_game_to_completion() {
    for seed in 0..10 {
        let config = GameConfig::default().with_seed(seed);
        let mut game = GameEngine::new(config, MemoryStore::new()).unwrap();
        game.choose_player_box(13).unwrap();
        play_to_final_decision(&mut game);

        let other = game.last_other_box().unwrap();
        let total: f64 = game.player_box_value().unwrap() + game.value_in_box(other).unwrap();
        let outcome = game.swap_box().unwrap();

        assert_eq!(outcome.winnings + outcome.player_box_value, total);
        assert!(game.phase().is_terminal());
    }
}

/// The snapshot serializes for a view.
#[test]
fn test_snapshot_serializes() {
    let mut game = testing_game();
    game.choose_player_box(3).unwrap();
    play_round(&mut game);

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: deal_engine::GameSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, snapshot);
    assert_eq!(back.phase, GamePhase::AwaitingOfferDecision { round: 1 });
    assert_eq!(back.values_in_play.len(), NUM_BOXES - 6);
}
