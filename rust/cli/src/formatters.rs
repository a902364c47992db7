//! Card, hand, and action formatters for terminal display.
//!
//! Pure functions for rendering engine values on a terminal. Suits use
//! Unicode symbols with an ASCII fallback for terminal environments that
//! don't render them.
//!
//! ## Example
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use twentyone_engine::cards::{Card, Rank, Suit};
use twentyone_engine::hand::{evaluate_hand, Hand};
use twentyone_engine::strategy::Action;

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments. On Windows, checks for Windows Terminal
/// (WT_SESSION), modern terminals (TERM_PROGRAM), or VS Code
/// (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback
/// (♥ ♦ ♣ ♠ or h d c s).
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as it appears on the card face (A, 2-10, J, Q, K).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        r => r.value().to_string(),
    }
}

/// Format a card as rank plus suit, e.g. "A♠" or "10♥".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a card sequence space-separated, e.g. "A♠ 10♥".
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Format a hand with its evaluated total, e.g. "A♠ 6♥ (17 soft)" or
/// "7♣ 8♦ (15)".
pub fn format_hand(hand: &Hand) -> String {
    let cards = format_cards(hand.cards());
    let value = evaluate_hand(hand);
    let soft = if value.is_soft { " soft" } else { "" };
    format!("{} ({}{})", cards, value.total, soft)
}

/// One-line action menu built from the currently legal actions,
/// e.g. "[H]it  [S]tand  [D]ouble  [P] Split".
pub fn format_action_menu(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|a| match a {
            Action::Hit => "[H]it",
            Action::Stand => "[S]tand",
            Action::Double => "[D]ouble",
            Action::Split => "s[P]lit",
            other => other.label(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}
