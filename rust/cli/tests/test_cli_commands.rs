use twentyone_cli::{exit_code, run};

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn advise_recommends_splitting_eights() {
    let (code, out, _) = run_cli(&["twentyone", "advise", "--player", "8,8", "--dealer", "10"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Recommended: Split"), "output: {out}");
}

#[test]
fn advise_keeps_conditional_recommendations_visible() {
    let (code, out, _) = run_cli(&["twentyone", "advise", "--player", "A,7", "--dealer", "2"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Double or Stand"), "output: {out}");
}

#[test]
fn advise_rejects_invalid_ranks_with_error_exit() {
    let (code, _, err) = run_cli(&["twentyone", "advise", "--player", "8,X", "--dealer", "10"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("Error:"), "stderr: {err}");
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let (code1, out1, _) = run_cli(&["twentyone", "deal", "--seed", "12345"]);
    let (code2, out2, _) = run_cli(&["twentyone", "deal", "--seed", "12345"]);
    assert_eq!(code1, exit_code::SUCCESS);
    assert_eq!(code2, exit_code::SUCCESS);
    assert_eq!(out1, out2, "same seed should produce identical output");
    assert!(out1.contains("Player:"));
    assert!(out1.contains("Dealer shows:"));
    assert!(out1.contains("Recommended:"));
}

#[test]
fn chart_prints_all_three_tables_by_default() {
    let (code, out, _) = run_cli(&["twentyone", "chart"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Hard totals"));
    assert!(out.contains("Soft totals"));
    assert!(out.contains("Pairs"));
}

#[test]
fn chart_can_print_a_single_table() {
    let (code, out, _) = run_cli(&["twentyone", "chart", "--table", "pairs"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Pairs"));
    assert!(!out.contains("Hard totals"));
}

#[test]
fn unknown_subcommand_exits_with_error() {
    let (code, _, err) = run_cli(&["twentyone", "shuffleboard"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(!err.is_empty());
}

#[test]
fn missing_required_argument_exits_with_error() {
    let (code, _, _) = run_cli(&["twentyone", "advise", "--player", "8,8"]);
    assert_eq!(code, exit_code::ERROR);
}

#[test]
fn help_prints_to_stdout_and_succeeds() {
    let (code, out, _) = run_cli(&["twentyone", "--help"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("practice"), "help lists subcommands: {out}");
    assert!(out.contains("advise"));
}

#[test]
fn practice_with_zero_hands_prints_an_empty_summary() {
    // Zero hands never touches stdin, which keeps this wiring test
    // independent of the harness environment
    let (code, out, _) = run_cli(&[
        "twentyone",
        "practice",
        "--hands",
        "0",
        "--seed",
        "1",
        "--decks",
        "6",
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Practice session: 0 hands"), "output: {out}");
    assert!(out.contains("Session over: 0/0 correct (0%)"));
}

#[test]
fn practice_rejects_invalid_deck_count() {
    let (code, _, err) = run_cli(&["twentyone", "practice", "--hands", "1", "--decks", "5"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("Invalid deck count"), "stderr: {err}");
}
