//! Practice round generation and scorekeeping.
//!
//! A [`Trainer`] owns a shoe and deals quiz rounds: two player cards and one
//! dealer up-card, paired with the table's recommended action. Naturals are
//! rejected and redealt because a blackjack leaves nothing to decide.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::EngineError;
use crate::hand::{evaluate_hand, hand_category, Hand, HandCategory};
use crate::rules::GameRules;
use crate::shoe::Shoe;
use crate::strategy::{recommended_action, Action};

/// Redeal guard. Naturals occur on roughly 1 in 21 deals, so hitting this
/// bound means the shoe or RNG is broken, not bad luck.
const MAX_REDEALS: usize = 128;

/// One quiz round: the dealt situation and the graded answer key.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PracticeHand {
    pub player_hand: Hand,
    pub dealer_up_card: Card,
    pub correct_action: Action,
}

/// Which hand population to practice against.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandFocus {
    /// Whatever the shoe deals
    Random,
    /// Hard totals only
    Hard,
    /// Soft (Ace-as-11) hands only
    Soft,
    /// Pairs only
    Pair,
}

/// Deals practice rounds from a rules-sized shoe.
#[derive(Debug)]
pub struct Trainer {
    rules: GameRules,
    shoe: Shoe,
    seed: Option<u64>,
}

impl Trainer {
    /// Create a trainer for the given rules, optionally seeded for
    /// reproducible sessions.
    pub fn new(rules: GameRules, seed: Option<u64>) -> Result<Self, EngineError> {
        rules.validate()?;
        let shoe = match seed {
            Some(s) => Shoe::with_seed(rules.number_of_decks, s),
            None => Shoe::new(rules.number_of_decks),
        };
        Ok(Self { rules, shoe, seed })
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Deal a random practice round, rejecting naturals.
    ///
    /// Each attempt reshuffles a freshly rebuilt shoe, so the rejection loop
    /// can never run the shoe down; the attempt bound only guards against a
    /// broken dealer.
    pub fn deal_random_hand(&mut self) -> Result<PracticeHand, EngineError> {
        for _ in 0..MAX_REDEALS {
            self.shoe.shuffle();
            let cards = self.shoe.deal_many(3)?;
            let player_hand = Hand::from_cards(vec![cards[0], cards[1]]);
            let dealer_up_card = cards[2];

            // A natural has no decision to grade
            if evaluate_hand(&player_hand).is_blackjack {
                continue;
            }

            let correct_action = recommended_action(&player_hand, dealer_up_card);
            return Ok(PracticeHand {
                player_hand,
                dealer_up_card,
                correct_action,
            });
        }
        Err(EngineError::RedealLimit {
            attempts: MAX_REDEALS,
        })
    }

    /// Deal a round restricted to the requested hand population.
    pub fn deal_focused_hand(&mut self, focus: HandFocus) -> Result<PracticeHand, EngineError> {
        let player_hand = match focus {
            HandFocus::Random => return self.deal_random_hand(),
            HandFocus::Pair => self.deal_pair_hand()?,
            HandFocus::Soft => self.deal_soft_hand()?,
            HandFocus::Hard => self.deal_hard_hand()?,
        };
        let dealer_up_card = self.draw()?;
        let correct_action = recommended_action(&player_hand, dealer_up_card);
        Ok(PracticeHand {
            player_hand,
            dealer_up_card,
            correct_action,
        })
    }

    /// Two cards of equal value, scanned from a fresh shuffle. Every value
    /// appears at least four times per deck, so the scan always terminates
    /// before the shoe does.
    fn deal_pair_hand(&mut self) -> Result<Hand, EngineError> {
        self.shoe.shuffle();
        let anchor = self.draw()?;
        let partner = loop {
            let c = self.draw()?;
            if c.value() == anchor.value() {
                break c;
            }
        };
        Ok(Hand::from_cards(vec![anchor, partner]))
    }

    /// An Ace plus a 2-9 kicker (a ten-value kicker would be a natural, a
    /// second Ace would be a pair).
    fn deal_soft_hand(&mut self) -> Result<Hand, EngineError> {
        self.shoe.shuffle();
        let ace = loop {
            let c = self.draw()?;
            if c.rank == Rank::Ace {
                break c;
            }
        };
        let kicker = loop {
            let c = self.draw()?;
            if c.rank != Rank::Ace && c.value() <= 9 {
                break c;
            }
        };
        Ok(Hand::from_cards(vec![ace, kicker]))
    }

    /// Two Ace-free cards of different values, so the result categorizes as
    /// hard rather than pair.
    fn deal_hard_hand(&mut self) -> Result<Hand, EngineError> {
        self.shoe.shuffle();
        let first = loop {
            let c = self.draw()?;
            if c.rank != Rank::Ace {
                break c;
            }
        };
        let second = loop {
            let c = self.draw()?;
            if c.rank != Rank::Ace && c.value() != first.value() {
                break c;
            }
        };
        let hand = Hand::from_cards(vec![first, second]);
        debug_assert_eq!(hand_category(&hand), HandCategory::Hard);
        Ok(hand)
    }

    fn draw(&mut self) -> Result<Card, EngineError> {
        self.shoe
            .deal_card()
            .ok_or(EngineError::InsufficientCards {
                requested: 1,
                remaining: 0,
            })
    }
}

/// Running score for a practice session. Owned and mutated by the caller;
/// the trainer itself is stateless between rounds apart from its RNG.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct PracticeStats {
    pub total_hands: u32,
    pub correct_decisions: u32,
    /// Rounded percentage, 0-100
    pub accuracy: u8,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl PracticeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one graded round into the counters.
    pub fn record(&mut self, correct: bool) {
        self.total_hands += 1;
        if correct {
            self.correct_decisions += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
        self.accuracy = calculate_accuracy(self.correct_decisions, self.total_hands);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Rounded percentage of correct decisions; 0 when nothing was played.
pub fn calculate_accuracy(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u8
}

/// End-of-session encouragement keyed to accuracy.
pub fn accuracy_feedback(accuracy: u8) -> &'static str {
    match accuracy {
        95..=100 => "Perfect! You've mastered basic strategy!",
        90..=94 => "Excellent! You're very close to mastery!",
        80..=89 => "Great job! Keep practicing!",
        70..=79 => "Good progress! Review the chart and try again.",
        60..=69 => "Keep going! Practice makes perfect.",
        _ => "Don't give up! Study the strategy chart and practice more.",
    }
}

/// Banner shown once a streak gets notable.
pub fn streak_message(streak: u32) -> Option<&'static str> {
    match streak {
        s if s >= 20 => Some("INCREDIBLE STREAK!"),
        s if s >= 10 => Some("AMAZING STREAK!"),
        s if s >= 5 => Some("ON FIRE!"),
        _ => None,
    }
}
