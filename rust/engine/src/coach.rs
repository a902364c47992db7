//! Teaching copy for learn mode: why the table says what it says.
//!
//! Everything here is presentation text with no correctness contract beyond
//! referencing the actual situation; the decision itself always comes from
//! [`crate::strategy`].

use crate::cards::{Card, Rank};
use crate::hand::{hand_category, hand_total, pair_rank, soft_total, Hand, HandCategory};
use crate::strategy::Action;

/// Strategic insight for one situation, broken into the angles a coach
/// would walk through at the table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CoachingHint {
    pub primary_insight: String,
    pub dealer_analysis: String,
    pub player_analysis: String,
    pub strategic_concept: String,
    pub common_mistake: Option<String>,
}

/// Generate a coaching hint for a hand, dealer up-card and the recommended
/// action for them.
pub fn coaching_hint(player_hand: &Hand, dealer_up_card: Card, action: Action) -> CoachingHint {
    let dealer_value = dealer_up_card.dealer_value();
    match hand_category(player_hand) {
        HandCategory::Pair => pair_coaching(player_hand, dealer_value, action),
        HandCategory::Soft => soft_coaching(player_hand, dealer_value, action),
        HandCategory::Hard => hard_coaching(player_hand, dealer_value, action),
    }
}

fn pair_coaching(player_hand: &Hand, dealer_value: u8, action: Action) -> CoachingHint {
    let rank = pair_rank(player_hand).unwrap_or(Rank::Ten);
    let total = hand_total(player_hand);

    if rank == Rank::Ace {
        return CoachingHint {
            primary_insight: "Always split Aces! Each Ace becomes the foundation for a potentially strong hand.".into(),
            dealer_analysis: dealer_bust_probability(dealer_value),
            player_analysis: "Starting with 11 gives you excellent chances for 21, while 12 (soft or hard) is a weak total.".into(),
            strategic_concept: "The value of starting with an Ace far exceeds playing a soft 12. Most casinos limit to one card per split Ace.".into(),
            common_mistake: Some("Never treat a pair of Aces as a soft 12. The splitting opportunity is too valuable.".into()),
        };
    }

    if rank == Rank::Eight {
        return CoachingHint {
            primary_insight: "Always split 8s! A total of 16 is the worst hand in blackjack.".into(),
            dealer_analysis: dealer_bust_probability(dealer_value),
            player_analysis: "16 loses to most dealer totals. Two hands of 8 give you fresh starts with decent building blocks.".into(),
            strategic_concept: "Starting fresh with 8 vs 8 is mathematically superior to the misery of 16, even against strong dealer cards.".into(),
            common_mistake: Some("Standing on 16 loses more often than splitting. Hitting 16 is better than standing, but splitting is best.".into()),
        };
    }

    if rank.is_ten_value() {
        return CoachingHint {
            primary_insight: "Never split 10s! You already have 20, one of the best hands possible.".into(),
            dealer_analysis: format!("Dealer shows {dealer_value}. {}", dealer_outcome(dealer_value)),
            player_analysis: "20 wins against everything except 21. Splitting would create two hands starting at 10: good, but not as strong as 20.".into(),
            strategic_concept: "The expectation of 20 (winning ~80% of the time) is better than two hands starting at 10.".into(),
            common_mistake: Some("Greed is the enemy here. Splitting 10s decreases your overall win rate despite seeming clever.".into()),
        };
    }

    if rank == Rank::Five {
        let doubling = action == Action::Double;
        return CoachingHint {
            primary_insight: if doubling {
                "Double down on 10! Never split 5s.".into()
            } else {
                "Treat 5,5 as hard 10.".into()
            },
            dealer_analysis: if dealer_value <= 6 {
                format!(
                    "Dealer shows {dealer_value}, a weak card. Dealer busts {} of the time.",
                    bust_percentage(dealer_value)
                )
            } else {
                format!("Dealer shows {dealer_value}. {}", dealer_outcome(dealer_value))
            },
            player_analysis: if doubling {
                "Starting with 10 is excellent for doubling. You have a strong chance of making 20 or 21.".into()
            } else {
                "With 10, you want to build toward a strong total. Splitting 5s creates two weak starting points.".into()
            },
            strategic_concept: "10 is a premium doubling hand against weak dealers. Never split it into two hands of 5.".into(),
            common_mistake: Some("Splitting 5s creates two terrible starting totals (5) instead of one excellent total (10).".into()),
        };
    }

    let rank_value = rank.value();
    if action == Action::Split {
        let against_weak = (2..=6).contains(&dealer_value);
        return CoachingHint {
            primary_insight: format!("Split {rank_value}s against dealer {dealer_value}."),
            dealer_analysis: if against_weak {
                format!(
                    "Dealer shows {dealer_value}, a weak card with high bust probability ({}).",
                    bust_percentage(dealer_value)
                )
            } else {
                format!("Dealer shows {dealer_value}. {}", dealer_outcome(dealer_value))
            },
            player_analysis: format!(
                "Two hands starting with {rank_value} offer better prospects than one hand of {total}."
            ),
            strategic_concept: if against_weak {
                "Against weak dealer cards, splitting leverages their bust probability while creating two opportunities to win.".into()
            } else {
                "Splitting here minimizes losses or maximizes gains based on mathematical expectation.".into()
            },
            common_mistake: (total == 12 || total == 14).then(|| {
                format!("Playing {total} as a single hand is weak. Splitting gives you better chances.")
            }),
        };
    }

    CoachingHint {
        primary_insight: format!("Don't split {rank_value}s here. Play as {total}."),
        dealer_analysis: dealer_analysis(dealer_value),
        player_analysis: if action == Action::Hit {
            format!("{total} is not strong enough against dealer {dealer_value}. You need to improve.")
        } else {
            format!("{total} is solid against dealer {dealer_value}. Stand and hope for dealer bust or lower total.")
        },
        strategic_concept: "The combined total is stronger than splitting would be in this scenario.".into(),
        common_mistake: None,
    }
}

fn soft_coaching(player_hand: &Hand, dealer_value: u8, action: Action) -> CoachingHint {
    let soft = soft_total(player_hand).unwrap_or(12);

    if matches!(action, Action::Double | Action::DoubleOrStand | Action::DoubleOrHit) {
        let against_weak = (4..=6).contains(&dealer_value);
        return CoachingHint {
            primary_insight: format!("Double soft {soft}! This is an aggressive, profitable play."),
            dealer_analysis: if against_weak {
                format!(
                    "Dealer shows {dealer_value}, a weak card. Exploit their {} bust probability.",
                    bust_percentage(dealer_value)
                )
            } else {
                format!("Dealer shows {dealer_value}. You have a favorable situation.")
            },
            player_analysis: format!(
                "Soft {soft} can't bust on one hit. You're trying to improve while risking extra money in a good spot."
            ),
            strategic_concept: "Soft hands double against weak dealers because: (1) you can't bust, (2) you might make a strong total, (3) dealer is likely to bust.".into(),
            common_mistake: Some(if (17..=18).contains(&soft) {
                format!("Don't be passive with soft {soft} against weak dealers. Doubling is more profitable long-term.")
            } else {
                "Many players fear doubling soft hands, but mathematics shows this is optimal against weak dealer cards.".into()
            }),
        };
    }

    if action == Action::Stand {
        return CoachingHint {
            primary_insight: format!("Stand on soft {soft}."),
            dealer_analysis: if dealer_value >= 7 {
                format!("Dealer shows {dealer_value}. They're likely to make a strong total (17-21).")
            } else {
                format!("Dealer shows {dealer_value} but your soft {soft} is strong enough.")
            },
            player_analysis: if soft >= 19 {
                format!("Soft {soft} is excellent! Very few hands beat this.")
            } else {
                format!("Soft {soft} is solid. Hitting risks making it worse without enough upside.")
            },
            strategic_concept: if soft >= 19 {
                "Soft 19-20 wins most of the time. Standing is nearly always correct.".into()
            } else {
                "Against strong dealer cards, soft 18 is marginal. Standing is the safe, correct play.".into()
            },
            common_mistake: (soft == 18 && dealer_value >= 9).then(|| {
                "Some players stand on soft 18 vs 9/10/A, but hitting is actually better. Against 7-8, standing is correct.".into()
            }),
        };
    }

    CoachingHint {
        primary_insight: format!("Hit soft {soft}. You can't bust!"),
        dealer_analysis: dealer_analysis(dealer_value),
        player_analysis: format!(
            "Soft {soft} is not strong enough. The beauty of soft hands: you can hit freely without busting."
        ),
        strategic_concept: "Always improve weak soft hands. The Ace protects you from busting, making hitting a free improvement opportunity.".into(),
        common_mistake: Some("Never stand on soft 17 or below (except soft 18 vs 2-8). You have nothing to lose by hitting.".into()),
    }
}

fn hard_coaching(player_hand: &Hand, dealer_value: u8, action: Action) -> CoachingHint {
    let total = hand_total(player_hand);

    if action == Action::Double {
        return CoachingHint {
            primary_insight: format!("Double on {total}! You have the advantage."),
            dealer_analysis: format!(
                "Dealer shows {dealer_value}, a weak card with {} bust probability.",
                bust_percentage(dealer_value)
            ),
            player_analysis: match total {
                11 => "11 is the best doubling hand! You can't bust and have excellent odds of making 20 or 21.".into(),
                10 => "10 is excellent for doubling. Strong chance of making 20, and dealer is weak.".into(),
                _ => format!("{total} is favorable against this weak dealer. Doubling maximizes your expected profit."),
            },
            strategic_concept: "Doubling on 9-11 against weak dealers is fundamental. You're putting more money out when you have the edge.".into(),
            common_mistake: Some(if total == 11 && dealer_value <= 10 {
                "Always double 11 (except vs Ace). This is one of the most profitable plays in blackjack.".into()
            } else {
                "Many players hesitate to double, but this is exactly when you want extra money in action.".into()
            }),
        };
    }

    if action == Action::Stand {
        let against_weak = (2..=6).contains(&dealer_value);

        if total >= 17 {
            return CoachingHint {
                primary_insight: format!("Always stand on {total}! Too risky to hit."),
                dealer_analysis: dealer_analysis(dealer_value),
                player_analysis: format!(
                    "With {total}, hitting has a {} chance of busting. The risk far outweighs potential gain.",
                    bust_chance(total)
                ),
                strategic_concept: "Standing on 17+ is fundamental. Even when dealer shows strong cards, hitting busts too often to be worthwhile.".into(),
                common_mistake: (total == 17 && dealer_value >= 9).then(|| {
                    "Even against strong dealer cards, hitting 17 busts 69% of the time. Standing is correct despite feeling weak.".into()
                }),
            };
        }

        if against_weak {
            return CoachingHint {
                primary_insight: format!("Stand on {total} vs dealer {dealer_value}."),
                dealer_analysis: format!(
                    "Dealer shows {dealer_value}, a weak card. Dealer busts {} of the time.",
                    bust_percentage(dealer_value)
                ),
                player_analysis: format!(
                    "Your {total} is vulnerable, but dealer's bust probability makes standing profitable."
                ),
                strategic_concept: "Against weak dealer cards (2-6), stand on 12-16. Force dealer to hit their weak hand and risk busting.".into(),
                common_mistake: Some("The most common beginner mistake: hitting 12-16 vs weak dealers. Let the dealer take the bust risk!".into()),
            };
        }

        return CoachingHint {
            primary_insight: format!("Stand on {total}."),
            dealer_analysis: dealer_analysis(dealer_value),
            player_analysis: format!(
                "{total} vs {dealer_value}: standing is optimal based on dealer's likely outcomes."
            ),
            strategic_concept: "Basic strategy balances your bust risk against dealer probabilities.".into(),
            common_mistake: None,
        };
    }

    let cant_bust = total <= 11;
    let stiff = (12..=16).contains(&total);
    CoachingHint {
        primary_insight: if cant_bust {
            format!("Hit {total}, you can't bust!")
        } else {
            format!("Hit {total} vs dealer {dealer_value}.")
        },
        dealer_analysis: if dealer_value >= 7 {
            format!("Dealer shows {dealer_value}. They're likely to make a pat hand (17-21).")
        } else {
            dealer_analysis(dealer_value)
        },
        player_analysis: if cant_bust {
            format!("With {total}, any card improves your hand without busting. Always hit.")
        } else if stiff {
            format!("{total} is a \"stiff\" hand, weak and at risk of busting. But against dealer {dealer_value}, hitting is the lesser evil.")
        } else {
            format!("{total} needs improvement to compete with dealer's likely total.")
        },
        strategic_concept: if cant_bust {
            "Always hit hard 11 or below (unless doubling). Impossible to bust = no reason not to improve.".into()
        } else if stiff && dealer_value >= 7 {
            "Against dealer 7-A, your 12-16 loses most of the time either way. Hitting gives you a fighting chance despite bust risk.".into()
        } else {
            "When dealer shows strength, you need to match it by improving your hand.".into()
        },
        common_mistake: if total == 12 && dealer_value >= 7 {
            Some("12 vs 7+ feels scary to hit, but standing wins less often. Hit and hope for 2-9.".into())
        } else if stiff && dealer_value >= 7 {
            Some("Many players stand on stiff hands out of fear. Against strong dealers, hitting is correct despite the bust risk.".into())
        } else {
            None
        },
    }
}

fn dealer_bust_probability(dealer_value: u8) -> String {
    let percentage = bust_percentage(dealer_value);
    if (2..=6).contains(&dealer_value) {
        format!("Dealer shows {dealer_value}, a weak card. Dealer busts {percentage} of the time with this upcard.")
    } else if (7..=9).contains(&dealer_value) {
        format!("Dealer shows {dealer_value}. Only {percentage} bust rate, dealer likely makes a pat hand.")
    } else {
        let name = if dealer_value == 10 { "10" } else { "Ace" };
        format!("Dealer shows {name}. Strong card with just {percentage} bust probability.")
    }
}

fn dealer_outcome(dealer_value: u8) -> &'static str {
    match dealer_value {
        7..=9 => "Strong card: dealer makes pat hands (17-21) most of the time.",
        10 => "Dealer likely has 20 or will draw to a strong total.",
        11 => "Ace is the dealer's strongest card. They have flexible options.",
        _ => "Dealer is in a difficult position.",
    }
}

fn dealer_analysis(dealer_value: u8) -> String {
    if (2..=6).contains(&dealer_value) {
        format!(
            "Dealer shows {dealer_value}, a weak card with {} bust probability. This drives your strategy.",
            bust_percentage(dealer_value)
        )
    } else if dealer_value >= 7 {
        format!(
            "Dealer shows {dealer_value}. Strong card with low bust rate ({}). They're likely to make 17-21.",
            bust_percentage(dealer_value)
        )
    } else {
        format!("Dealer shows {dealer_value}.")
    }
}

// Approximate long-run bust rates per dealer upcard.
fn bust_percentage(dealer_value: u8) -> &'static str {
    match dealer_value {
        2 => "35%",
        3 => "38%",
        4 => "40%",
        5 => "43%",
        6 => "42%",
        7 => "26%",
        8 => "24%",
        9 => "23%",
        10 => "23%",
        11 => "17%",
        _ => "unknown",
    }
}

// Chance of busting when hitting the given hard total.
fn bust_chance(total: u8) -> &'static str {
    match total {
        12 => "31%",
        13 => "39%",
        14 => "46%",
        15 => "54%",
        16 => "62%",
        17 => "69%",
        18 => "77%",
        19 => "85%",
        20 => "92%",
        _ => "high",
    }
}
