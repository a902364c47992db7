//! Chart command handler: the strategy matrix as aligned text tables.

use std::io::Write;

use twentyone_engine::chart::{
    hard_totals_chart, pairs_chart, soft_totals_chart, ChartRow, DEALER_COLUMNS,
};

use crate::cli::TableArg;
use crate::error::CliError;

/// Handle the chart command.
///
/// Prints the requested strategy table (or all three) with dealer up-cards
/// as columns and hand labels as rows; cells are the table codes
/// (H, S, D, DS, P).
pub fn handle_chart_command(table: TableArg, out: &mut dyn Write) -> Result<(), CliError> {
    match table {
        TableArg::Hard => write_table(out, "Hard totals", &hard_totals_chart())?,
        TableArg::Soft => write_table(out, "Soft totals", &soft_totals_chart())?,
        TableArg::Pairs => write_table(out, "Pairs", &pairs_chart())?,
        TableArg::All => {
            write_table(out, "Hard totals", &hard_totals_chart())?;
            writeln!(out)?;
            write_table(out, "Soft totals", &soft_totals_chart())?;
            writeln!(out)?;
            write_table(out, "Pairs", &pairs_chart())?;
        }
    }
    Ok(())
}

fn write_table(out: &mut dyn Write, title: &str, rows: &[ChartRow]) -> std::io::Result<()> {
    writeln!(out, "{} (dealer up-card across)", title)?;

    let mut header = format!("{:>6}", "");
    for dealer in DEALER_COLUMNS {
        let label = if dealer == 11 {
            "A".to_string()
        } else {
            dealer.to_string()
        };
        header.push_str(&format!("{:>4}", label));
    }
    writeln!(out, "{}", header)?;

    for row in rows {
        let mut line = format!("{:>6}", row.label);
        for cell in row.cells {
            line.push_str(&format!("{:>4}", cell.as_code()));
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
