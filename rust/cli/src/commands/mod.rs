//! Command handler modules for the twentyone CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: output streams (`&mut dyn Write`) passed as
//!   parameters, stdin as `&mut dyn BufRead` for interactive commands
//! - Error propagation via the `CliError` enum

pub mod advise;
pub mod cfg;
pub mod chart;
pub mod deal;
pub mod practice;
pub mod stats;

pub use advise::handle_advise_command;
pub use cfg::handle_cfg_command;
pub use chart::handle_chart_command;
pub use deal::handle_deal_command;
pub use practice::{handle_practice_command, PracticeOpts};
pub use stats::handle_stats_command;
