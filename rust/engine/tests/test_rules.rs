use twentyone_engine::errors::EngineError;
use twentyone_engine::rules::{
    BlackjackPayout, GameRules, DEFAULT_RULES, SINGLE_DECK_RULES, UNFAVORABLE_RULES,
    VEGAS_STRIP_RULES,
};

#[test]
fn presets_are_valid() {
    for rules in [
        DEFAULT_RULES,
        SINGLE_DECK_RULES,
        VEGAS_STRIP_RULES,
        UNFAVORABLE_RULES,
    ] {
        assert!(rules.validate().is_ok(), "{rules:?} should validate");
    }
}

#[test]
fn default_rules_match_the_shipped_matrix() {
    assert_eq!(DEFAULT_RULES.number_of_decks, 6);
    assert!(!DEFAULT_RULES.dealer_hits_soft17, "matrix assumes S17");
    assert!(DEFAULT_RULES.double_after_split, "matrix assumes DAS");
    assert_eq!(DEFAULT_RULES.blackjack_payout, BlackjackPayout::ThreeToTwo);
    assert_eq!(GameRules::default(), DEFAULT_RULES);
}

#[test]
fn odd_deck_counts_are_rejected() {
    for decks in [0u8, 3, 5, 7, 9, 12] {
        let rules = GameRules {
            number_of_decks: decks,
            ..DEFAULT_RULES
        };
        assert_eq!(
            rules.validate(),
            Err(EngineError::InvalidDeckCount { decks })
        );
    }
}

#[test]
fn payout_ratios() {
    assert_eq!(BlackjackPayout::ThreeToTwo.ratio(), 1.5);
    assert_eq!(BlackjackPayout::SixToFive.ratio(), 1.2);
}

#[test]
fn payout_serializes_as_casino_notation() {
    assert_eq!(
        serde_json::to_string(&BlackjackPayout::ThreeToTwo).unwrap(),
        "\"3:2\""
    );
    assert_eq!(
        serde_json::to_string(&BlackjackPayout::SixToFive).unwrap(),
        "\"6:5\""
    );
}
