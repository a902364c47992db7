use twentyone_engine::cards::{Card, Rank as R, Suit as S};
use twentyone_engine::hand::create_hand;
use twentyone_engine::strategy::{is_action_correct, Action};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn action_codes_round_trip() {
    for action in [
        Action::Hit,
        Action::Stand,
        Action::Double,
        Action::DoubleOrStand,
        Action::DoubleOrHit,
        Action::Split,
    ] {
        assert_eq!(Action::from_code(action.as_code()), Some(action));
    }
    assert_eq!(Action::from_code("X"), None);
}

#[test]
fn conditional_resolution_collapses_only_when_double_illegal() {
    assert_eq!(Action::Double.resolve(false), Action::Hit);
    assert_eq!(Action::DoubleOrStand.resolve(false), Action::Stand);
    assert_eq!(Action::DoubleOrHit.resolve(false), Action::Hit);
    assert_eq!(Action::Double.resolve(true), Action::Double);
    assert_eq!(Action::DoubleOrStand.resolve(true), Action::DoubleOrStand);
    assert_eq!(Action::DoubleOrHit.resolve(true), Action::DoubleOrHit);
    assert_eq!(Action::Stand.resolve(false), Action::Stand);
    assert_eq!(Action::Split.resolve(false), Action::Split);
}

#[test]
fn double_or_stand_accepts_both_plays_while_doubling_is_legal() {
    // Two-card soft 18 vs dealer 2: the table says DS
    let hand = create_hand(vec![c(S::Hearts, R::Ace), c(S::Diamonds, R::Seven)]);
    let dealer = c(S::Clubs, R::Two);

    assert!(is_action_correct(&hand, dealer, Action::Double));
    assert!(is_action_correct(&hand, dealer, Action::Stand));
    assert!(!is_action_correct(&hand, dealer, Action::Hit));
    assert!(!is_action_correct(&hand, dealer, Action::Split));
}

#[test]
fn double_or_stand_collapses_to_stand_only_on_three_cards() {
    // Same soft 18, but grown to three cards: doubling is gone
    let hand = create_hand(vec![
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
    ]);
    let dealer = c(S::Spades, R::Two);

    assert!(is_action_correct(&hand, dealer, Action::Stand));
    assert!(
        !is_action_correct(&hand, dealer, Action::Double),
        "double is never correct when it is not legal"
    );
    assert!(!is_action_correct(&hand, dealer, Action::Hit));
}

#[test]
fn plain_double_collapses_to_hit_on_three_cards() {
    // Hard 11 built from three cards vs 6: table says double, legality says hit
    let hand = create_hand(vec![
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Four),
        c(S::Clubs, R::Five),
    ]);
    let dealer = c(S::Spades, R::Six);

    assert!(is_action_correct(&hand, dealer, Action::Hit));
    assert!(!is_action_correct(&hand, dealer, Action::Double));
    assert!(!is_action_correct(&hand, dealer, Action::Stand));
}

#[test]
fn exact_match_grading_for_unconditional_rows() {
    let sixteen = create_hand(vec![c(S::Hearts, R::Ten), c(S::Diamonds, R::Six)]);
    let dealer_ten = c(S::Clubs, R::Ten);
    assert!(is_action_correct(&sixteen, dealer_ten, Action::Hit));
    assert!(!is_action_correct(&sixteen, dealer_ten, Action::Stand));

    let pair = create_hand(vec![c(S::Hearts, R::Eight), c(S::Diamonds, R::Eight)]);
    assert!(is_action_correct(&pair, dealer_ten, Action::Split));
    assert!(!is_action_correct(&pair, dealer_ten, Action::Hit));
}

#[test]
fn legal_double_recommendation_rejects_stand() {
    // Hard 11 on two cards vs 6: only double is correct
    let hand = create_hand(vec![c(S::Hearts, R::Six), c(S::Diamonds, R::Five)]);
    let dealer = c(S::Clubs, R::Six);

    assert!(is_action_correct(&hand, dealer, Action::Double));
    assert!(!is_action_correct(&hand, dealer, Action::Hit));
    assert!(!is_action_correct(&hand, dealer, Action::Stand));
}
