//! Basic-strategy table and action resolution.
//!
//! The matrix encodes mathematically optimal play for multi-deck games where
//! the dealer stands on soft 17 and doubling after split is allowed. Rows
//! are fixed-size arrays covering every dealer up-card from 2 through Ace
//! (11), so a lookup can never land on a missing cell.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank};
use crate::hand::{
    can_double, can_split, hand_category, hand_total, pair_rank, soft_total, Hand, HandCategory,
};

/// A player decision. `DoubleOrStand` and `DoubleOrHit` are conditional:
/// they name two equally optimal plays and collapse to the second one when
/// doubling is not legal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "H")]
    Hit,
    #[serde(rename = "S")]
    Stand,
    #[serde(rename = "D")]
    Double,
    #[serde(rename = "DS")]
    DoubleOrStand,
    #[serde(rename = "DH")]
    DoubleOrHit,
    #[serde(rename = "P")]
    Split,
}

impl Action {
    /// Parse a table code (H, S, D, DS, DH, P).
    pub fn from_code(code: &str) -> Option<Action> {
        match code {
            "H" => Some(Action::Hit),
            "S" => Some(Action::Stand),
            "D" => Some(Action::Double),
            "DS" => Some(Action::DoubleOrStand),
            "DH" => Some(Action::DoubleOrHit),
            "P" => Some(Action::Split),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
            Action::Double => "D",
            Action::DoubleOrStand => "DS",
            Action::DoubleOrHit => "DH",
            Action::Split => "P",
        }
    }

    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::Double => "Double",
            Action::DoubleOrStand => "Double or Stand",
            Action::DoubleOrHit => "Double or Hit",
            Action::Split => "Split",
        }
    }

    /// What the action asks the player to do at the table.
    pub fn description(&self) -> &'static str {
        match self {
            Action::Hit => "Take another card",
            Action::Stand => "Keep your current hand",
            Action::Double => "Double your bet and take exactly one more card",
            Action::DoubleOrStand => "Double if allowed, otherwise Stand",
            Action::DoubleOrHit => "Double if allowed, otherwise Hit",
            Action::Split => "Split your pair into two separate hands",
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, Action::DoubleOrStand | Action::DoubleOrHit)
    }

    /// Collapse double-dependent actions when doubling is not legal:
    /// D becomes Hit, DS becomes Stand, DH becomes Hit. Identity otherwise.
    pub fn resolve(self, can_double: bool) -> Action {
        if can_double {
            return self;
        }
        match self {
            Action::Double | Action::DoubleOrHit => Action::Hit,
            Action::DoubleOrStand => Action::Stand,
            other => other,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const H: Action = Action::Hit;
const S: Action = Action::Stand;
const D: Action = Action::Double;
const DS: Action = Action::DoubleOrStand;
const P: Action = Action::Split;

/// One table row: the action for each dealer up-card 2 through 11 (Ace).
pub type StrategyRow = [Action; 10];

/// The complete basic-strategy matrix, fully enumerated at compile time and
/// immutable for the process lifetime. Safe to share across threads.
pub struct StrategyMatrix {
    /// Hard totals 5..=20, indexed by `total - 5`.
    hard: [StrategyRow; 16],
    /// Soft totals 13..=20 (A,2 through A,9), indexed by `total - 13`.
    soft: [StrategyRow; 8],
    /// Pair ranks 2..=9, then 10-value, then Ace.
    pairs: [StrategyRow; 10],
}

static BASIC_STRATEGY: StrategyMatrix = StrategyMatrix {
    hard: [
        // 5-8: always hit
        [H, H, H, H, H, H, H, H, H, H],
        [H, H, H, H, H, H, H, H, H, H],
        [H, H, H, H, H, H, H, H, H, H],
        [H, H, H, H, H, H, H, H, H, H],
        // 9: double vs 3-6
        [H, D, D, D, D, H, H, H, H, H],
        // 10: double vs 2-9
        [D, D, D, D, D, D, D, D, H, H],
        // 11: double vs everything but an Ace
        [D, D, D, D, D, D, D, D, D, H],
        // 12: stand vs 4-6
        [H, H, S, S, S, H, H, H, H, H],
        // 13-16: stand vs 2-6, otherwise hit
        [S, S, S, S, S, H, H, H, H, H],
        [S, S, S, S, S, H, H, H, H, H],
        [S, S, S, S, S, H, H, H, H, H],
        [S, S, S, S, S, H, H, H, H, H],
        // 17-20: always stand
        [S, S, S, S, S, S, S, S, S, S],
        [S, S, S, S, S, S, S, S, S, S],
        [S, S, S, S, S, S, S, S, S, S],
        [S, S, S, S, S, S, S, S, S, S],
    ],
    soft: [
        // A,2 and A,3: double vs 5-6
        [H, H, H, D, D, H, H, H, H, H],
        [H, H, H, D, D, H, H, H, H, H],
        // A,4 and A,5: double vs 4-6
        [H, H, D, D, D, H, H, H, H, H],
        [H, H, D, D, D, H, H, H, H, H],
        // A,6: double vs 3-6
        [H, D, D, D, D, H, H, H, H, H],
        // A,7: the tricky one. Double vs 2-6, stand vs 7-8, hit vs 9-A
        [DS, DS, DS, DS, DS, S, S, H, H, H],
        // A,8 and A,9: always stand
        [S, S, S, S, S, S, S, S, S, S],
        [S, S, S, S, S, S, S, S, S, S],
    ],
    pairs: [
        // 2,2 and 3,3: split vs 2-7
        [P, P, P, P, P, P, H, H, H, H],
        [P, P, P, P, P, P, H, H, H, H],
        // 4,4: split only vs 5-6
        [H, H, H, P, P, H, H, H, H, H],
        // 5,5: never split, play as hard 10
        [D, D, D, D, D, D, D, D, H, H],
        // 6,6: split vs 2-6
        [P, P, P, P, P, H, H, H, H, H],
        // 7,7: split vs 2-7
        [P, P, P, P, P, P, H, H, H, H],
        // 8,8: always split
        [P, P, P, P, P, P, P, P, P, P],
        // 9,9: split vs 2-9 except 7
        [P, P, P, P, P, S, P, P, S, S],
        // 10,10: never split, 20 is too strong
        [S, S, S, S, S, S, S, S, S, S],
        // A,A: always split
        [P, P, P, P, P, P, P, P, P, P],
    ],
};

impl StrategyMatrix {
    pub fn hard_row(&self, total: u8) -> Option<&StrategyRow> {
        (5..=20).contains(&total).then(|| &self.hard[total as usize - 5])
    }

    pub fn soft_row(&self, total: u8) -> Option<&StrategyRow> {
        (13..=20).contains(&total).then(|| &self.soft[total as usize - 13])
    }

    pub fn pair_row(&self, rank: Rank) -> Option<&StrategyRow> {
        let idx = match rank {
            Rank::Ace => 9,
            r if r.is_ten_value() => 8,
            r => r.value() as usize - 2,
        };
        Some(&self.pairs[idx])
    }
}

/// The process-wide strategy matrix (S17, DAS, multi-deck).
pub fn basic_strategy() -> &'static StrategyMatrix {
    &BASIC_STRATEGY
}

fn column(dealer_value: u8) -> usize {
    dealer_value.clamp(2, 11) as usize - 2
}

/// Table lookup before conditional resolution. May return `DoubleOrStand`
/// even when the hand cannot double; callers resolve against legality.
fn raw_action(player_hand: &Hand, dealer_up_card: Card) -> Action {
    let matrix = basic_strategy();
    let col = column(dealer_up_card.dealer_value());

    match hand_category(player_hand) {
        HandCategory::Pair => {
            // hand_category guarantees the pair rank exists
            let rank = pair_rank(player_hand).unwrap_or(Rank::Ten);
            matrix.pair_row(rank).map(|row| row[col]).unwrap_or(S)
        }
        HandCategory::Soft => {
            // Soft totals outside 13..=20 (possible once a hand grows past
            // two cards) pin to the nearest boundary row.
            let total = soft_total(player_hand).unwrap_or(13).clamp(13, 20);
            matrix.soft_row(total).map(|row| row[col]).unwrap_or(S)
        }
        HandCategory::Hard => {
            let total = hand_total(player_hand);
            if total < 5 {
                // Unreachable from a standard two-card deal
                H
            } else if total > 20 {
                // Covers 21 and busted hands
                S
            } else {
                matrix.hard_row(total).map(|row| row[col]).unwrap_or(S)
            }
        }
    }
}

/// The recommended action for a hand against a dealer up-card.
///
/// Conditional actions are resolved against doubling legality: a hand that
/// can no longer double gets the fallback play. When doubling is legal the
/// conditional survives, meaning either of its two plays is optimal.
pub fn recommended_action(player_hand: &Hand, dealer_up_card: Card) -> Action {
    raw_action(player_hand, dealer_up_card).resolve(can_double(player_hand))
}

/// Grade a user's decision against the strategy.
///
/// A conditional recommendation accepts either of its plays; choosing
/// Double when doubling is not legal is always wrong.
pub fn is_action_correct(player_hand: &Hand, dealer_up_card: Card, user_action: Action) -> bool {
    if user_action == Action::Double && !can_double(player_hand) {
        return false;
    }

    let recommended = recommended_action(player_hand, dealer_up_card);
    if user_action == recommended {
        return true;
    }
    match recommended {
        Action::DoubleOrStand => matches!(user_action, Action::Double | Action::Stand),
        Action::DoubleOrHit => matches!(user_action, Action::Double | Action::Hit),
        _ => false,
    }
}

/// Actions the player may legally take right now, in menu order.
pub fn available_actions(player_hand: &Hand) -> Vec<Action> {
    let mut actions = vec![Action::Hit, Action::Stand];
    if can_double(player_hand) {
        actions.push(Action::Double);
    }
    if can_split(player_hand) {
        actions.push(Action::Split);
    }
    actions
}

/// A recommendation paired with a human-readable rationale.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecommendation {
    pub action: Action,
    pub explanation: String,
    pub is_optimal: bool,
}

/// Recommend an action together with a templated explanation naming the
/// totals involved.
pub fn action_recommendation(player_hand: &Hand, dealer_up_card: Card) -> ActionRecommendation {
    let action = recommended_action(player_hand, dealer_up_card);
    let explanation = generate_explanation(player_hand, dealer_up_card, action);
    ActionRecommendation {
        action,
        explanation,
        is_optimal: true,
    }
}

fn pair_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ace => "A",
        _ => "10",
    }
}

fn generate_explanation(player_hand: &Hand, dealer_up_card: Card, action: Action) -> String {
    let dealer_value = dealer_up_card.dealer_value();
    let total = hand_total(player_hand);

    match hand_category(player_hand) {
        HandCategory::Pair => {
            let rank = pair_rank(player_hand).unwrap_or(Rank::Ten);
            let label = pair_label(rank);
            match action {
                Action::Split if matches!(rank, Rank::Ace | Rank::Eight) => {
                    format!("Always split {label},{label}. This is a fundamental rule.")
                }
                Action::Split => format!("Split {label},{label} vs dealer {dealer_value}."),
                Action::Stand => format!(
                    "Stand on {label},{label} vs dealer {dealer_value}. {total} is strong enough."
                ),
                Action::Double => format!(
                    "Double {label},{label} (treat as {total}) vs dealer {dealer_value}."
                ),
                _ => format!("Hit {label},{label} (treat as {total}) vs dealer {dealer_value}."),
            }
        }
        HandCategory::Soft => {
            let soft = soft_total(player_hand).unwrap_or(total);
            match action {
                Action::Double | Action::DoubleOrStand | Action::DoubleOrHit => format!(
                    "Double soft {soft} vs dealer {dealer_value}. Good opportunity."
                ),
                Action::Stand => format!(
                    "Stand on soft {soft}. Strong enough vs dealer {dealer_value}."
                ),
                _ => format!(
                    "Hit soft {soft}. Can't bust and need to improve vs dealer {dealer_value}."
                ),
            }
        }
        HandCategory::Hard => match action {
            Action::Double => format!(
                "Double on {total} vs dealer {dealer_value}. You have the edge."
            ),
            Action::Stand if total >= 17 => {
                format!("Always stand on {total}. Too risky to hit.")
            }
            Action::Stand if (2..=6).contains(&dealer_value) => format!(
                "Stand on {total} vs dealer {dealer_value}. Hope dealer busts."
            ),
            Action::Stand => format!("Stand on {total} vs dealer {dealer_value}."),
            _ if total <= 11 => format!("Hit {total}. Can't bust and need to improve."),
            _ => format!("Hit {total} vs dealer {dealer_value}. Need to improve."),
        },
    }
}
