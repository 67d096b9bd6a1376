//! JSONL event journal - append-only writer

use crate::error::EventError;
use crate::reader::EventReader;
use chrono::{DateTime, Utc};
use quorum_wallet::WalletEvent;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the journal inside its directory
pub(crate) const JOURNAL_FILE: &str = "events.jsonl";

/// One journaled event, as written to disk.
///
/// `sequence` is gapless and starts at 1; readers verify it on replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
    pub event: WalletEvent,
}

/// Append-only JSONL journal for wallet events
pub struct EventJournal {
    file_path: PathBuf,
    writer: BufWriter<File>,
    next_sequence: u64,
}

impl EventJournal {
    /// Open (or create) the journal in the given directory.
    ///
    /// The next sequence number is recovered from the existing file, so
    /// reopening continues the gapless numbering.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, EventError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let file_path = dir.join(JOURNAL_FILE);

        let next_sequence = EventReader::open(dir)?
            .last_sequence()?
            .map_or(1, |last| last + 1);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)?;

        Ok(Self {
            file_path,
            writer: BufWriter::new(file),
            next_sequence,
        })
    }

    /// Append an event, assigning it the next sequence number.
    ///
    /// The record is flushed before this returns.
    pub fn append(&mut self, event: &WalletEvent) -> Result<EventRecord, EventError> {
        let record = EventRecord {
            sequence: self.next_sequence,
            recorded_at: Utc::now(),
            event: event.clone(),
        };

        let json = serde_json::to_string(&record)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;

        tracing::debug!(sequence = record.sequence, name = event.name(), "event journaled");
        self.next_sequence += 1;

        Ok(record)
    }

    /// Sequence number the next append will receive
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Path of the journal file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Flush any buffered output
    pub fn flush(&mut self) -> Result<(), EventError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for EventJournal {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
