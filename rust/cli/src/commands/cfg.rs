//! Configuration command handler.
//!
//! Implements the `cfg` command, which displays the current twentyone
//! configuration settings with their sources (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "number_of_decks": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it as
/// formatted JSON on the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "number_of_decks": {
            "value": config.number_of_decks,
            "source": sources.number_of_decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "hands_per_session": {
            "value": config.hands_per_session,
            "source": sources.hands_per_session,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
