use serde::{Deserialize, Serialize};

use crate::game::RoundArchive;
use crate::player::PlayerId;
use crate::round::{EndReason, RoundEvent};
use crate::score::PlayerPoints;

/// Outcome portion of a [`RoundRecord`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub reason: EndReason,
    pub winner_id: Option<PlayerId>,
    pub points: Vec<PlayerPoints>,
}

/// One settled round, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed the round was dealt with
    pub seed: u32,
    /// One-based round number within its match
    pub round: u32,
    pub first_player_id: PlayerId,
    pub redeal_count: u32,
    /// Forced draws, turns and koikoi decisions in order
    pub turns: Vec<RoundEvent>,
    pub result: RoundOutcome,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_archive(round_id: String, archive: &RoundArchive) -> Self {
        let summary = &archive.summary;
        Self {
            round_id,
            seed: summary.seed,
            round: summary.round,
            first_player_id: summary.first_player_id.clone(),
            redeal_count: summary.redeal_count,
            turns: archive.events.clone(),
            result: RoundOutcome {
                reason: summary.reason,
                winner_id: summary.winner_id.clone(),
                points: summary.points.clone(),
            },
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; nothing is written.
    pub fn detached(date: &str) -> Self {
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
