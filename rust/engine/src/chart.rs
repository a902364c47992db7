//! Strategy matrix flattened into display rows.
//!
//! The trainer's chart views (and the table-completeness tests) consume the
//! matrix as labeled rows rather than poking at lookup indices.

use crate::cards::Rank;
use crate::strategy::{basic_strategy, StrategyRow};

/// Dealer up-card columns, left to right (11 renders as A).
pub const DEALER_COLUMNS: [u8; 10] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// One labeled chart row.
#[derive(Debug, Clone)]
pub struct ChartRow {
    pub label: String,
    pub cells: StrategyRow,
}

/// Hard totals 20 down to 5, strongest first like a printed chart.
pub fn hard_totals_chart() -> Vec<ChartRow> {
    let matrix = basic_strategy();
    (5..=20)
        .rev()
        .filter_map(|total| {
            matrix.hard_row(total).map(|row| ChartRow {
                label: total.to_string(),
                cells: *row,
            })
        })
        .collect()
}

/// Soft totals A,9 down to A,2.
pub fn soft_totals_chart() -> Vec<ChartRow> {
    let matrix = basic_strategy();
    (13..=20)
        .rev()
        .filter_map(|total| {
            matrix.soft_row(total).map(|row| ChartRow {
                label: format!("A,{}", total - 11),
                cells: *row,
            })
        })
        .collect()
}

/// Pair rows A,A first, then 10,10 down to 2,2.
pub fn pairs_chart() -> Vec<ChartRow> {
    let matrix = basic_strategy();
    let order = [
        Rank::Ace,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];
    order
        .iter()
        .filter_map(|&rank| {
            let label = match rank {
                Rank::Ace => "A,A".to_string(),
                Rank::Ten => "10,10".to_string(),
                r => format!("{v},{v}", v = r.value()),
            };
            matrix.pair_row(rank).map(|row| ChartRow {
                label,
                cells: *row,
            })
        })
        .collect()
}
