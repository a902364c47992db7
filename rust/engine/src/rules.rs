use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Blackjack payout offered by the house.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BlackjackPayout {
    /// 3:2, the traditional payout
    #[serde(rename = "3:2")]
    ThreeToTwo,
    /// 6:5, common at cheaper tables
    #[serde(rename = "6:5")]
    SixToFive,
}

impl BlackjackPayout {
    pub fn ratio(self) -> f64 {
        match self {
            BlackjackPayout::ThreeToTwo => 1.5,
            BlackjackPayout::SixToFive => 1.2,
        }
    }
}

/// Table rules the strategy matrix was built for.
///
/// Only the deck count feeds back into the engine (it sizes the practice
/// shoe); the rest documents the assumptions behind the matrix and is kept
/// for configuration and display.
///
/// ```
/// use twentyone_engine::rules::{GameRules, DEFAULT_RULES};
///
/// assert_eq!(DEFAULT_RULES.number_of_decks, 6);
/// assert!(DEFAULT_RULES.validate().is_ok());
///
/// let bad = GameRules { number_of_decks: 3, ..DEFAULT_RULES };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    pub number_of_decks: u8,
    /// H17 tables hit soft 17; the shipped matrix assumes S17 (false).
    pub dealer_hits_soft17: bool,
    /// DAS; assumed true by the pair rows.
    pub double_after_split: bool,
    pub surrender_allowed: bool,
    pub blackjack_payout: BlackjackPayout,
}

impl GameRules {
    /// Reject deck counts no casino shoe uses.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self.number_of_decks {
            1 | 2 | 4 | 6 | 8 => Ok(()),
            decks => Err(EngineError::InvalidDeckCount { decks }),
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        DEFAULT_RULES
    }
}

/// Most common casino setup: multi-deck, S17, DAS.
pub const DEFAULT_RULES: GameRules = GameRules {
    number_of_decks: 6,
    dealer_hits_soft17: false,
    double_after_split: true,
    surrender_allowed: false,
    blackjack_payout: BlackjackPayout::ThreeToTwo,
};

pub const SINGLE_DECK_RULES: GameRules = GameRules {
    number_of_decks: 1,
    dealer_hits_soft17: false,
    double_after_split: true,
    surrender_allowed: false,
    blackjack_payout: BlackjackPayout::ThreeToTwo,
};

pub const VEGAS_STRIP_RULES: GameRules = GameRules {
    number_of_decks: 6,
    dealer_hits_soft17: false,
    double_after_split: true,
    surrender_allowed: true,
    blackjack_payout: BlackjackPayout::ThreeToTwo,
};

/// Less favorable rules some casinos run (H17, 6:5 payout).
pub const UNFAVORABLE_RULES: GameRules = GameRules {
    number_of_decks: 8,
    dealer_hits_soft17: true,
    double_after_split: true,
    surrender_allowed: false,
    blackjack_payout: BlackjackPayout::SixToFive,
};
