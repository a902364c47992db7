//! # Twentyone CLI Library
//!
//! Command-line interface for the twentyone blackjack basic-strategy
//! trainer. Exposes subcommands for practicing decisions, looking up
//! situations, printing the strategy chart, and aggregating session logs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["twentyone", "advise", "--player", "8,8", "--dealer", "10"];
//! let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `practice`: Interactive quiz session with grading and statistics
//! - `deal`: Deal a single practice round for inspection
//! - `advise`: Look up the recommendation for an explicit situation
//! - `chart`: Print the basic-strategy chart
//! - `stats`: Aggregate statistics from JSONL session logs
//! - `cfg`: Display current configuration settings

use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, TwentyoneCli};
use commands::{
    handle_advise_command, handle_cfg_command, handle_chart_command, handle_deal_command,
    handle_practice_command, handle_stats_command, PracticeOpts,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["twentyone", "chart", "--table", "pairs"];
/// let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let parsed = match TwentyoneCli::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            crate::write_or_exit!(out, "{}", e);
            return exit_code::SUCCESS;
        }
        Err(e) => {
            crate::write_or_exit!(err, "{}", e);
            return exit_code::ERROR;
        }
    };

    let result = match parsed.command {
        Commands::Practice {
            hands,
            seed,
            decks,
            focus,
            log,
            coach,
        } => {
            let opts = PracticeOpts {
                hands,
                seed,
                decks,
                focus: focus.to_focus(),
                log,
                coach,
            };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            handle_practice_command(&opts, &mut input, out, err)
        }
        Commands::Deal { seed, decks } => handle_deal_command(seed, decks, out),
        Commands::Advise {
            player,
            dealer,
            coach,
        } => handle_advise_command(&player, &dealer, coach, out),
        Commands::Chart { table } => handle_chart_command(table, out),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
