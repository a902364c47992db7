//! Input parsing and validation for interactive commands.
//!
//! Handles the strings users type: action answers during a practice
//! session, and rank lists like "A,7" for the advise command.

use twentyone_engine::cards::Rank;
use twentyone_engine::strategy::Action;

/// Result type for parsing user input into a practice answer.
///
/// - Valid action (hit, stand, double, split)
/// - Quit command (user wants to exit)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into an [`Action`] or the quit command.
///
/// Accepts the following input formats (case-insensitive):
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
/// - "d" or "double" → Double
/// - "p" or "split" → Split
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// use twentyone_cli::validation::{parse_action_input, ParseResult};
/// use twentyone_engine::strategy::Action;
///
/// assert_eq!(parse_action_input("hit"), ParseResult::Action(Action::Hit));
/// assert_eq!(parse_action_input("P"), ParseResult::Action(Action::Split));
/// assert_eq!(parse_action_input("q"), ParseResult::Quit);
///
/// match parse_action_input("banana") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_action_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match input.as_str() {
        "q" | "quit" => ParseResult::Quit,
        "h" | "hit" => ParseResult::Action(Action::Hit),
        "s" | "stand" => ParseResult::Action(Action::Stand),
        "d" | "double" => ParseResult::Action(Action::Double),
        "p" | "split" => ParseResult::Action(Action::Split),
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Use h, s, d, p or q.",
            other
        )),
    }
}

/// Parse a rank token as users write it: A, 2-10, J, Q, K (case-insensitive).
pub fn parse_rank(token: &str) -> Result<Rank, String> {
    match token.trim().to_uppercase().as_str() {
        "A" | "ACE" => Ok(Rank::Ace),
        "2" => Ok(Rank::Two),
        "3" => Ok(Rank::Three),
        "4" => Ok(Rank::Four),
        "5" => Ok(Rank::Five),
        "6" => Ok(Rank::Six),
        "7" => Ok(Rank::Seven),
        "8" => Ok(Rank::Eight),
        "9" => Ok(Rank::Nine),
        "10" | "T" => Ok(Rank::Ten),
        "J" => Ok(Rank::Jack),
        "Q" => Ok(Rank::Queen),
        "K" => Ok(Rank::King),
        other => Err(format!(
            "Unrecognized rank '{}'. Use A, 2-10, J, Q or K.",
            other
        )),
    }
}

/// Parse a comma-separated hand spec like "A,7" or "10,6,5".
///
/// At least two ranks are required; one card is not a decision.
pub fn parse_hand_spec(spec: &str) -> Result<Vec<Rank>, String> {
    let ranks: Result<Vec<Rank>, String> = spec.split(',').map(parse_rank).collect();
    let ranks = ranks?;
    if ranks.len() < 2 {
        return Err(format!(
            "A hand needs at least two cards, got '{}'",
            spec.trim()
        ));
    }
    Ok(ranks)
}
