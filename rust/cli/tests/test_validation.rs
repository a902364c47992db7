use twentyone_cli::validation::{parse_action_input, parse_hand_spec, parse_rank, ParseResult};
use twentyone_engine::cards::Rank;
use twentyone_engine::strategy::Action;

#[test]
fn parses_single_letter_actions() {
    assert_eq!(parse_action_input("h"), ParseResult::Action(Action::Hit));
    assert_eq!(parse_action_input("s"), ParseResult::Action(Action::Stand));
    assert_eq!(parse_action_input("d"), ParseResult::Action(Action::Double));
    assert_eq!(parse_action_input("p"), ParseResult::Action(Action::Split));
}

#[test]
fn parses_full_words_case_insensitively() {
    assert_eq!(parse_action_input("HIT"), ParseResult::Action(Action::Hit));
    assert_eq!(parse_action_input("Stand"), ParseResult::Action(Action::Stand));
    assert_eq!(
        parse_action_input("  double  "),
        ParseResult::Action(Action::Double)
    );
    assert_eq!(parse_action_input("Split"), ParseResult::Action(Action::Split));
}

#[test]
fn quit_commands_win_over_everything() {
    assert_eq!(parse_action_input("q"), ParseResult::Quit);
    assert_eq!(parse_action_input("quit"), ParseResult::Quit);
    assert_eq!(parse_action_input("QUIT"), ParseResult::Quit);
}

#[test]
fn garbage_input_reports_what_was_typed() {
    match parse_action_input("banana") {
        ParseResult::Invalid(msg) => {
            assert!(msg.contains("banana"));
            assert!(msg.contains("Unrecognized"));
        }
        other => panic!("Expected Invalid, got {:?}", other),
    }
    assert_eq!(
        parse_action_input("   "),
        ParseResult::Invalid("Empty input".to_string())
    );
}

#[test]
fn parses_every_rank_spelling() {
    assert_eq!(parse_rank("A"), Ok(Rank::Ace));
    assert_eq!(parse_rank("a"), Ok(Rank::Ace));
    assert_eq!(parse_rank("ace"), Ok(Rank::Ace));
    assert_eq!(parse_rank("2"), Ok(Rank::Two));
    assert_eq!(parse_rank("9"), Ok(Rank::Nine));
    assert_eq!(parse_rank("10"), Ok(Rank::Ten));
    assert_eq!(parse_rank("t"), Ok(Rank::Ten));
    assert_eq!(parse_rank("j"), Ok(Rank::Jack));
    assert_eq!(parse_rank("Q"), Ok(Rank::Queen));
    assert_eq!(parse_rank("k"), Ok(Rank::King));
    assert!(parse_rank("1").is_err());
    assert!(parse_rank("11").is_err());
    assert!(parse_rank("joker").is_err());
}

#[test]
fn hand_specs_need_at_least_two_cards() {
    assert_eq!(parse_hand_spec("A,7"), Ok(vec![Rank::Ace, Rank::Seven]));
    assert_eq!(
        parse_hand_spec("10, 6, 5"),
        Ok(vec![Rank::Ten, Rank::Six, Rank::Five])
    );
    assert!(parse_hand_spec("A").is_err());
    assert!(parse_hand_spec("A,banana").is_err());
    assert!(parse_hand_spec("").is_err());
}
