//! Advise command handler: look up one explicit situation.
//!
//! Takes the player hand as a rank list ("A,7") and the dealer up-card rank,
//! prints the recommendation with its rationale and the legal action menu.
//! Suits are irrelevant to the decision, so placeholder suits are assigned
//! round-robin.

use std::io::Write;

use twentyone_engine::cards::{all_suits, Card, Rank};
use twentyone_engine::coach::coaching_hint;
use twentyone_engine::hand::{create_hand, Hand};
use twentyone_engine::strategy::{action_recommendation, available_actions};

use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use crate::validation::{parse_hand_spec, parse_rank};

/// Handle the advise command.
///
/// # Arguments
///
/// * `player` - Comma-separated rank list, e.g. "A,7" or "10,6,5"
/// * `dealer` - Dealer up-card rank, e.g. "6" or "A"
/// * `coach` - Also print the coaching hint
/// * `out` - Output stream for command results
pub fn handle_advise_command(
    player: &str,
    dealer: &str,
    coach: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let ranks = parse_hand_spec(player).map_err(CliError::InvalidInput)?;
    let dealer_rank = parse_rank(dealer).map_err(CliError::InvalidInput)?;

    let hand = hand_from_ranks(&ranks);
    let dealer_card = Card {
        suit: all_suits()[3],
        rank: dealer_rank,
    };

    writeln!(out, "Player: {}", format_hand(&hand))?;
    writeln!(out, "Dealer shows: {}", format_card(&dealer_card))?;

    let rec = action_recommendation(&hand, dealer_card);
    writeln!(out, "Recommended: {}", rec.action.label())?;
    if rec.action.is_conditional() {
        writeln!(out, "  ({})", rec.action.description())?;
    }
    writeln!(out, "  {}", rec.explanation)?;

    let legal = available_actions(&hand)
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Legal actions: {}", legal)?;

    if coach {
        let hint = coaching_hint(&hand, dealer_card, rec.action);
        writeln!(out)?;
        writeln!(out, "Coach: {}", hint.primary_insight)?;
        writeln!(out, "  Dealer: {}", hint.dealer_analysis)?;
        writeln!(out, "  You: {}", hint.player_analysis)?;
        writeln!(out, "  Concept: {}", hint.strategic_concept)?;
        if let Some(mistake) = &hint.common_mistake {
            writeln!(out, "  Watch out: {}", mistake)?;
        }
    }
    Ok(())
}

/// Assign placeholder suits round-robin so repeated ranks stay distinct.
fn hand_from_ranks(ranks: &[Rank]) -> Hand {
    let suits = all_suits();
    let cards = ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| Card {
            suit: suits[i % suits.len()],
            rank,
        })
        .collect();
    create_hand(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advise_split_eights() {
        let mut out = Vec::new();
        handle_advise_command("8,8", "10", false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Recommended: Split"), "output: {output}");
        assert!(output.contains("Legal actions: Hit, Stand, Double, Split"));
    }

    #[test]
    fn test_advise_conditional_recommendation_names_both_plays() {
        let mut out = Vec::new();
        handle_advise_command("A,7", "2", false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(
            output.contains("Recommended: Double or Stand"),
            "output: {output}"
        );
        assert!(
            output.contains("otherwise Stand"),
            "conditional recommendations spell out the fallback: {output}"
        );
    }

    #[test]
    fn test_advise_three_card_hand_cannot_double() {
        let mut out = Vec::new();
        handle_advise_command("A,3,4", "5", false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Recommended: Stand"), "output: {output}");
        assert!(output.contains("Legal actions: Hit, Stand\n"));
    }

    #[test]
    fn test_advise_rejects_garbage_ranks() {
        let mut out = Vec::new();
        let result = handle_advise_command("A,banana", "5", false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_advise_rejects_single_card_hands() {
        let mut out = Vec::new();
        let result = handle_advise_command("A", "5", false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_advise_coach_mode_prints_the_hint() {
        let mut out = Vec::new();
        handle_advise_command("8,8", "10", true, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Coach: Always split 8s"), "output: {output}");
    }
}
