//! Command-line argument definitions for the twentyone binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use twentyone_engine::trainer::HandFocus;

#[derive(Debug, Parser)]
#[command(
    name = "twentyone",
    about = "Blackjack basic-strategy trainer",
    version
)]
pub struct TwentyoneCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive practice session
    Practice {
        /// Number of hands to play (config default when omitted)
        #[arg(long)]
        hands: Option<u32>,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Number of decks in the shoe (1, 2, 4, 6 or 8)
        #[arg(long)]
        decks: Option<u8>,
        /// Restrict the dealt hands to one category
        #[arg(long, value_enum, default_value = "random")]
        focus: FocusArg,
        /// Append graded rounds to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Print a coaching hint after each answer
        #[arg(long)]
        coach: bool,
    },
    /// Deal one practice round and show the recommended play
    Deal {
        /// RNG seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
        /// Number of decks in the shoe (1, 2, 4, 6 or 8)
        #[arg(long)]
        decks: Option<u8>,
    },
    /// Look up the recommendation for a specific situation
    Advise {
        /// Player hand as comma-separated ranks, e.g. "A,7" or "10,6"
        #[arg(long)]
        player: String,
        /// Dealer up-card rank, e.g. "6" or "A"
        #[arg(long)]
        dealer: String,
        /// Also print the coaching hint
        #[arg(long)]
        coach: bool,
    },
    /// Print the basic-strategy chart
    Chart {
        /// Which table to print
        #[arg(long, value_enum, default_value = "all")]
        table: TableArg,
    },
    /// Aggregate statistics from JSONL session logs
    Stats {
        /// JSONL file, or directory of .jsonl files
        #[arg(long)]
        input: PathBuf,
    },
    /// Display current configuration settings
    Cfg,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum FocusArg {
    Random,
    Hard,
    Soft,
    Pair,
}

impl FocusArg {
    pub fn to_focus(self) -> HandFocus {
        match self {
            FocusArg::Random => HandFocus::Random,
            FocusArg::Hard => HandFocus::Hard,
            FocusArg::Soft => HandFocus::Soft,
            FocusArg::Pair => HandFocus::Pair,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum TableArg {
    Hard,
    Soft,
    Pairs,
    All,
}
