//! Practice command handler: the interactive quiz loop.
//!
//! Deals rounds from a [`Trainer`], reads the player's answer from the
//! injected input stream, grades it, and keeps session statistics. Rounds
//! can optionally be appended to a JSONL session log for later aggregation
//! by the stats command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Local;

use twentyone_engine::coach::coaching_hint;
use twentyone_engine::hand::{hand_category, hand_total};
use twentyone_engine::rules::{GameRules, DEFAULT_RULES};
use twentyone_engine::session::{RoundRecord, SessionLogger};
use twentyone_engine::strategy::{action_recommendation, available_actions, is_action_correct};
use twentyone_engine::trainer::{
    accuracy_feedback, streak_message, HandFocus, PracticeStats, Trainer,
};

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action_menu, format_card, format_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_action_input, ParseResult};

/// Options for a practice session, after clap parsing.
#[derive(Debug, Clone)]
pub struct PracticeOpts {
    /// Rounds to play; config default when `None`
    pub hands: Option<u32>,
    /// Fixed RNG seed; config value or OS entropy when `None`
    pub seed: Option<u64>,
    /// Shoe size; config default when `None`
    pub decks: Option<u8>,
    /// Hand population to drill
    pub focus: HandFocus,
    /// JSONL log destination; an empty path means "pick a timestamped name"
    pub log: Option<PathBuf>,
    /// Print coaching hints after each answer
    pub coach: bool,
}

/// Handle the practice command.
///
/// Runs up to `hands` rounds, prompting on `input` for each. The session
/// ends early on `q`/EOF; the summary is printed either way.
///
/// # Arguments
///
/// * `opts` - Parsed session options
/// * `input` - Answer source (stdin in production, a cursor in tests)
/// * `out` - Output stream for prompts, verdicts, and the summary
/// * `err` - Output stream for input warnings
pub fn handle_practice_command(
    opts: &PracticeOpts,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let hands = opts.hands.unwrap_or(cfg.hands_per_session);
    let decks = opts.decks.unwrap_or(cfg.number_of_decks);
    let seed = opts.seed.or(cfg.seed);

    let rules = GameRules {
        number_of_decks: decks,
        ..DEFAULT_RULES
    };
    let mut trainer = Trainer::new(rules, seed)?;
    let mut logger = match log_path(opts) {
        Some(path) => Some(SessionLogger::create(path)?),
        None => None,
    };
    let mut stats = PracticeStats::new();

    writeln!(out, "Practice session: {} hands, {}-deck shoe", hands, decks)?;

    'session: for n in 1..=hands {
        let round = trainer.deal_focused_hand(opts.focus)?;
        let legal = available_actions(&round.player_hand);

        writeln!(out)?;
        writeln!(out, "Hand {}/{}: {}", n, hands, format_hand(&round.player_hand))?;
        writeln!(out, "Dealer shows: {}", format_card(&round.dealer_up_card))?;

        let chosen = loop {
            writeln!(out, "{}  (q to quit)", format_action_menu(&legal))?;
            let Some(line) = read_stdin_line(input) else {
                break 'session;
            };
            match parse_action_input(&line) {
                ParseResult::Quit => break 'session,
                ParseResult::Action(action) if legal.contains(&action) => break action,
                ParseResult::Action(action) => {
                    ui::display_warning(
                        err,
                        &format!("{} is not available for this hand.", action.label()),
                    )?;
                }
                ParseResult::Invalid(msg) => {
                    ui::display_warning(err, &msg)?;
                }
            }
        };

        let correct = is_action_correct(&round.player_hand, round.dealer_up_card, chosen);
        stats.record(correct);

        if correct {
            writeln!(out, "Correct!")?;
            if let Some(banner) = streak_message(stats.current_streak) {
                writeln!(out, "{}", banner)?;
            }
        } else {
            let rec = action_recommendation(&round.player_hand, round.dealer_up_card);
            writeln!(out, "Incorrect. Correct play: {}.", rec.action.label())?;
            writeln!(out, "  {}", rec.explanation)?;
        }

        if opts.coach {
            let hint = coaching_hint(&round.player_hand, round.dealer_up_card, round.correct_action);
            writeln!(out, "Coach: {}", hint.primary_insight)?;
            writeln!(out, "  {}", hint.dealer_analysis)?;
            writeln!(out, "  {}", hint.player_analysis)?;
        }

        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed,
                player_cards: round.player_hand.cards().to_vec(),
                dealer_up_card: round.dealer_up_card,
                category: hand_category(&round.player_hand),
                total: hand_total(&round.player_hand),
                chosen,
                correct_action: round.correct_action,
                was_correct: correct,
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Session over: {}/{} correct ({}%)",
        stats.correct_decisions, stats.total_hands, stats.accuracy
    )?;
    if stats.total_hands > 0 {
        writeln!(out, "Best streak: {}", stats.best_streak)?;
        writeln!(out, "{}", accuracy_feedback(stats.accuracy))?;
    }
    Ok(())
}

/// An explicitly empty `--log` value asks for a timestamped default name.
fn log_path(opts: &PracticeOpts) -> Option<PathBuf> {
    let path = opts.log.as_ref()?;
    if path.as_os_str().is_empty() {
        Some(PathBuf::from(format!(
            "twentyone-{}.jsonl",
            Local::now().format("%Y%m%d-%H%M%S")
        )))
    } else {
        Some(path.clone())
    }
}
