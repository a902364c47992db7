use std::fs;
use std::path::Path;

use twentyone_cli::{exit_code, run};
use twentyone_engine::cards::{Card, Rank, Suit};
use twentyone_engine::hand::HandCategory;
use twentyone_engine::session::RoundRecord;
use twentyone_engine::strategy::Action;

fn record(id: u32, category: HandCategory, was_correct: bool) -> RoundRecord {
    RoundRecord {
        round_id: format!("20260805-{:06}", id),
        seed: None,
        player_cards: vec![
            Card {
                suit: Suit::Hearts,
                rank: Rank::Ten,
            },
            Card {
                suit: Suit::Diamonds,
                rank: Rank::Six,
            },
        ],
        dealer_up_card: Card {
            suit: Suit::Clubs,
            rank: Rank::Ten,
        },
        category,
        total: 16,
        chosen: Action::Hit,
        correct_action: Action::Hit,
        was_correct,
        ts: Some("2026-08-05T12:00:00Z".to_string()),
    }
}

fn write_log(path: &Path, records: &[RoundRecord]) {
    let lines: Vec<String> = records
        .iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect();
    fs::write(path, lines.join("\n") + "\n").unwrap();
}

fn run_stats(input: &Path) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["twentyone", "stats", "--input", input.to_str().unwrap()],
        &mut out,
        &mut err,
    );
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn aggregates_totals_and_per_category_accuracy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.jsonl");
    write_log(
        &path,
        &[
            record(1, HandCategory::Hard, true),
            record(2, HandCategory::Hard, false),
            record(3, HandCategory::Soft, true),
            record(4, HandCategory::Pair, true),
        ],
    );

    let (code, out, _) = run_stats(&path);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Hands: 4"), "output: {out}");
    assert!(out.contains("Correct: 3"));
    assert!(out.contains("Accuracy: 75%"));
    assert!(out.contains("hard: 1/2 (50%)"));
    assert!(out.contains("soft: 1/1 (100%)"));
    assert!(out.contains("pair: 1/1 (100%)"));
}

#[test]
fn aggregates_every_jsonl_file_in_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_log(
        &dir.path().join("a.jsonl"),
        &[record(1, HandCategory::Hard, true)],
    );
    write_log(
        &dir.path().join("b.jsonl"),
        &[record(2, HandCategory::Soft, false)],
    );
    // Non-jsonl files are ignored
    fs::write(dir.path().join("notes.txt"), "not a log").unwrap();

    let (code, out, _) = run_stats(dir.path());
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Hands: 2"), "output: {out}");
    assert!(out.contains("Accuracy: 50%"));
}

#[test]
fn malformed_lines_are_skipped_with_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.jsonl");
    let good = serde_json::to_string(&record(1, HandCategory::Hard, true)).unwrap();
    fs::write(&path, format!("{}\nnot json at all\n", good)).unwrap();

    let (code, out, err) = run_stats(&path);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Hands: 1"), "output: {out}");
    assert!(err.contains("Failed to parse line 2"), "stderr: {err}");
}

#[test]
fn empty_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.jsonl");
    fs::write(&path, "").unwrap();

    let (code, _, err) = run_stats(&path);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("No rounds found"), "stderr: {err}");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, err) = run_stats(&dir.path().join("nope.jsonl"));
    assert_eq!(code, exit_code::ERROR);
    assert!(!err.is_empty());
}
