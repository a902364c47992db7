//! Stats command handler: aggregate JSONL session logs.
//!
//! Reads round records written by practice sessions and reports overall and
//! per-category accuracy. Malformed lines are reported to stderr and
//! skipped rather than aborting the aggregation.

use std::io::Write;
use std::path::Path;

use twentyone_engine::hand::HandCategory;
use twentyone_engine::session::RoundRecord;
use twentyone_engine::trainer::calculate_accuracy;

use crate::error::CliError;
use crate::io_utils::read_jsonl_lines;
use crate::parse_json_or_continue;

/// Handle the stats command.
///
/// # Arguments
///
/// * `input` - JSONL file, or directory whose `.jsonl` files are aggregated
/// * `out` - Output stream for the statistics report
/// * `err` - Output stream for parse warnings
pub fn handle_stats_command(
    input: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let lines = read_jsonl_lines(input).map_err(CliError::InvalidInput)?;

    let mut total = 0u32;
    let mut correct = 0u32;
    // (total, correct) per category
    let mut hard = (0u32, 0u32);
    let mut soft = (0u32, 0u32);
    let mut pair = (0u32, 0u32);

    for (idx, line) in lines.iter().enumerate() {
        let record: RoundRecord = parse_json_or_continue!(line, err, format!("line {}", idx + 1));
        total += 1;
        if record.was_correct {
            correct += 1;
        }
        let bucket = match record.category {
            HandCategory::Hard => &mut hard,
            HandCategory::Soft => &mut soft,
            HandCategory::Pair => &mut pair,
        };
        bucket.0 += 1;
        if record.was_correct {
            bucket.1 += 1;
        }
    }

    if total == 0 {
        return Err(CliError::InvalidInput(format!(
            "No rounds found in {}",
            input.display()
        )));
    }

    writeln!(out, "Hands: {}", total)?;
    writeln!(out, "Correct: {}", correct)?;
    writeln!(out, "Accuracy: {}%", calculate_accuracy(correct, total))?;
    writeln!(out, "By category:")?;
    for (name, (t, c)) in [("hard", hard), ("soft", soft), ("pair", pair)] {
        if t > 0 {
            writeln!(out, "  {}: {}/{} ({}%)", name, c, t, calculate_accuracy(c, t))?;
        }
    }
    Ok(())
}
