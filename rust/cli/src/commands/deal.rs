//! Deal command handler for single-round dealing and display.
//!
//! Deals one practice round (two player cards, one dealer up-card) and
//! prints the recommended play. Supports optional seeding for deterministic
//! dealing.

use std::io::Write;

use twentyone_engine::rules::{GameRules, DEFAULT_RULES};
use twentyone_engine::strategy::action_recommendation;
use twentyone_engine::trainer::Trainer;

use crate::error::CliError;
use crate::formatters::{format_card, format_hand};

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `decks` - Optional shoe size override (defaults to the standard 6)
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on invalid deck counts and
/// I/O errors.
pub fn handle_deal_command(
    seed: Option<u64>,
    decks: Option<u8>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let rules = GameRules {
        number_of_decks: decks.unwrap_or(DEFAULT_RULES.number_of_decks),
        ..DEFAULT_RULES
    };
    let mut trainer = Trainer::new(rules, Some(base_seed))?;
    let round = trainer.deal_random_hand()?;

    writeln!(out, "Player: {}", format_hand(&round.player_hand))?;
    writeln!(out, "Dealer shows: {}", format_card(&round.dealer_up_card))?;
    let rec = action_recommendation(&round.player_hand, round.dealer_up_card);
    writeln!(out, "Recommended: {}", rec.action.label())?;
    writeln!(out, "  {}", rec.explanation)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(42), None, &mut out);
        assert!(result.is_ok(), "Deal command should succeed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Player:"), "output: {output}");
        assert!(output.contains("Dealer shows:"));
        assert!(output.contains("Recommended:"));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), None, &mut out1).unwrap();
        handle_deal_command(Some(12345), None, &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(None, None, &mut out);
        assert!(result.is_ok(), "Deal command should succeed without seed");
    }

    #[test]
    fn test_deal_command_rejects_bad_deck_count() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(1), Some(3), &mut out);
        assert!(matches!(result, Err(CliError::Engine(_))));
    }

    #[test]
    fn test_deal_command_single_deck() {
        let mut out = Vec::new();
        handle_deal_command(Some(7), Some(1), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Recommended:"));
    }
}
