use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// An ordered blackjack hand. Insertion order is deal order; the decision
/// functions only care about the card multiset, but display code relies on
/// the order being preserved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a hand from dealt cards.
pub fn create_hand(cards: Vec<Card>) -> Hand {
    Hand::from_cards(cards)
}

/// The evaluated worth of a hand under Ace-flexible counting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandValue {
    /// Best total not exceeding 21 if any Ace assignment allows it,
    /// otherwise the all-Aces-as-1 sum.
    pub total: u8,
    /// At least one Ace is still counted as 11 (and the hand is not busted).
    pub is_soft: bool,
    /// Total exceeds 21.
    pub is_busted: bool,
    /// Exactly two cards totalling 21 (a natural).
    pub is_blackjack: bool,
}

/// Evaluate a hand, demoting Aces from 11 to 1 one at a time until the
/// total fits under 21 or no soft Ace remains. Order-independent, O(n).
///
/// An empty hand evaluates to the zero value rather than failing; callers
/// never ask for it in practice but the result is well defined.
pub fn evaluate_hand(hand: &Hand) -> HandValue {
    if hand.is_empty() {
        return HandValue {
            total: 0,
            is_soft: false,
            is_busted: false,
            is_blackjack: false,
        };
    }

    // Sum wide: a degenerate many-card hand can exceed u8 before the
    // demote loop brings it back down.
    let mut total: u32 = 0;
    let mut aces: u32 = 0;
    for card in hand.cards() {
        total += u32::from(card.value());
        if card.rank == Rank::Ace {
            aces += 1;
        }
    }

    // Demote one Ace per pass; a hand of several Aces may need all of them
    // demoted before the total fits.
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let total = total.min(u32::from(u8::MAX)) as u8;
    let is_busted = total > 21;
    let is_soft = aces > 0 && !is_busted;
    let is_blackjack = hand.len() == 2 && total == 21;

    HandValue {
        total,
        is_soft,
        is_busted,
        is_blackjack,
    }
}

pub fn is_soft_hand(hand: &Hand) -> bool {
    evaluate_hand(hand).is_soft
}

pub fn is_hard_hand(hand: &Hand) -> bool {
    !evaluate_hand(hand).is_soft
}

pub fn is_busted(hand: &Hand) -> bool {
    evaluate_hand(hand).is_busted
}

pub fn is_blackjack(hand: &Hand) -> bool {
    evaluate_hand(hand).is_blackjack
}

pub fn hand_total(hand: &Hand) -> u8 {
    evaluate_hand(hand).total
}

/// Total of a soft hand (A,2 = 13 through A,9 = 20), `None` when hard.
pub fn soft_total(hand: &Hand) -> Option<u8> {
    let value = evaluate_hand(hand);
    value.is_soft.then_some(value.total)
}

/// Total of a hard hand, `None` when soft.
pub fn hard_total(hand: &Hand) -> Option<u8> {
    let value = evaluate_hand(hand);
    (!value.is_soft).then_some(value.total)
}

/// Two cards of equal blackjack value. This is value equality, not rank
/// equality: K,Q is a pair because both count 10.
pub fn is_pair(hand: &Hand) -> bool {
    match hand.cards() {
        [a, b] => a.value() == b.value(),
        _ => false,
    }
}

/// Rank key of a pair for strategy lookup, with every 10-value rank
/// normalized to [`Rank::Ten`]. `None` when the hand is not a pair.
pub fn pair_rank(hand: &Hand) -> Option<Rank> {
    if !is_pair(hand) {
        return None;
    }
    let rank = hand.cards()[0].rank;
    if rank.is_ten_value() {
        Some(Rank::Ten)
    } else {
        Some(rank)
    }
}

/// Doubling is a first-decision action: exactly two cards.
pub fn can_double(hand: &Hand) -> bool {
    hand.len() == 2
}

/// Splitting requires a two-card pair.
pub fn can_split(hand: &Hand) -> bool {
    is_pair(hand)
}

/// Classification used to pick the strategy table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandCategory {
    Pair,
    Soft,
    Hard,
}

/// Category of a hand, checking pair before soft: A,A is a pair even though
/// it also evaluates as soft 12. The strategy lookup depends on this order.
pub fn hand_category(hand: &Hand) -> HandCategory {
    if is_pair(hand) {
        HandCategory::Pair
    } else if is_soft_hand(hand) {
        HandCategory::Soft
    } else {
        HandCategory::Hard
    }
}
