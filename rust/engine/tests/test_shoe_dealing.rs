use std::collections::HashSet;

use twentyone_engine::cards::Card;
use twentyone_engine::errors::EngineError;
use twentyone_engine::shoe::{Shoe, DEFAULT_DECKS};

#[test]
fn single_deck_shoe_has_52_unique_cards() {
    let mut shoe = Shoe::with_seed(1, 42);
    shoe.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = shoe.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        shoe.deal_card().is_none(),
        "after 52 cards, a single-deck shoe should be empty"
    );
}

#[test]
fn six_deck_shoe_holds_six_of_each_card() {
    let mut shoe = Shoe::with_seed(DEFAULT_DECKS, 7);
    shoe.shuffle();
    assert_eq!(shoe.remaining(), 312);
    assert_eq!(shoe.decks(), DEFAULT_DECKS);

    let mut counts = std::collections::HashMap::new();
    while let Some(c) = shoe.deal_card() {
        *counts.entry(c).or_insert(0u32) += 1;
    }
    assert_eq!(counts.len(), 52);
    assert!(counts.values().all(|&n| n == 6), "each card appears once per deck");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut a = Shoe::with_seed(6, 12345);
    let mut b = Shoe::with_seed(6, 12345);
    a.shuffle();
    b.shuffle();
    let first_a: Vec<Card> = (0..10).map(|_| a.deal_card().unwrap()).collect();
    let first_b: Vec<Card> = (0..10).map(|_| b.deal_card().unwrap()).collect();
    assert_eq!(first_a, first_b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut a = Shoe::with_seed(6, 1);
    let mut b = Shoe::with_seed(6, 2);
    a.shuffle();
    b.shuffle();
    let first_a: Vec<Card> = (0..10).map(|_| a.deal_card().unwrap()).collect();
    let first_b: Vec<Card> = (0..10).map(|_| b.deal_card().unwrap()).collect();
    assert_ne!(
        first_a, first_b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffle_restores_the_full_shoe() {
    let mut shoe = Shoe::with_seed(2, 9);
    shoe.shuffle();
    let _ = shoe.deal_many(20).unwrap();
    assert_eq!(shoe.remaining(), 84);
    shoe.shuffle();
    assert_eq!(shoe.remaining(), 104, "shuffle rebuilds every card");
}

#[test]
fn dealing_past_the_end_is_an_insufficient_cards_error() {
    let mut shoe = Shoe::with_seed(1, 3);
    shoe.shuffle();
    let _ = shoe.deal_many(50).unwrap();
    let err = shoe.deal_many(3).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            requested: 3,
            remaining: 2
        }
    );
    // The two remaining cards are untouched by the failed request
    assert_eq!(shoe.remaining(), 2);
}

#[test]
fn zero_deck_request_is_bumped_to_one() {
    let mut shoe = Shoe::with_seed(0, 5);
    shoe.shuffle();
    assert_eq!(shoe.remaining(), 52);
}
