use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits never influence a blackjack decision; they are kept for display
/// and so that two cards of the same rank remain distinct values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Blackjack valuation lives in [`Rank::value`]: face cards count 10 and an
/// Ace counts 11 until the hand evaluator demotes it to 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (10-value)
    Jack,
    /// Queen (10-value)
    Queen,
    /// King (10-value)
    King,
    /// Ace (11, demoted to 1 when the hand would bust)
    Ace,
}

impl Rank {
    /// Blackjack value of the rank. Aces report their soft value of 11;
    /// demotion to 1 happens during hand evaluation, never here.
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            r => r as u8,
        }
    }

    /// True for 10, J, Q, K. These ranks are interchangeable for pair
    /// detection and strategy lookup.
    pub fn is_ten_value(self) -> bool {
        matches!(self, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }
}

/// Represents a single playing card with a suit and rank.
/// Pure immutable value; the decision engine only ever reads it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    /// Blackjack value of the card (Ace = 11, faces = 10).
    pub fn value(self) -> u8 {
        self.rank.value()
    }

    /// Dealer up-card value used as the strategy column key, clamped to the
    /// inclusive range [2, 11].
    pub fn dealer_value(self) -> u8 {
        self.value().clamp(2, 11)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
