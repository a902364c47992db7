use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandCategory;
use crate::strategy::Action;

/// Record of one graded practice round, serialized to JSONL for session
/// history and later aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round identifier (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed of the session's shoe, when fixed
    pub seed: Option<u64>,
    /// The two player cards as dealt
    pub player_cards: Vec<Card>,
    /// The dealer up-card
    pub dealer_up_card: Card,
    /// Hand category used for the lookup
    pub category: HandCategory,
    /// Evaluated hand total
    pub total: u8,
    /// What the player answered
    pub chosen: Action,
    /// What the table recommends
    pub correct_action: Action,
    /// Verdict of the grading step
    pub was_correct: bool,
    /// Timestamp when the round was graded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL session log, one line per round.
pub struct SessionLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl SessionLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
