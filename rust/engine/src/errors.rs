use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Insufficient cards: requested {requested}, {remaining} remaining in shoe")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Invalid deck count: {decks} (expected 1, 2, 4, 6 or 8)")]
    InvalidDeckCount { decks: u8 },
    #[error("Failed to deal a non-blackjack hand after {attempts} attempts")]
    RedealLimit { attempts: usize },
}
