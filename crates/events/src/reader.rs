//! JSONL event reader - sequential reader for replay

use crate::error::EventError;
use crate::store::{EventRecord, JOURNAL_FILE};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Sequential journal reader for replay.
///
/// Records are returned in write order; a gap or regression in the
/// sequence numbers is reported as `EventError::OutOfOrder`.
pub struct EventReader {
    file_path: PathBuf,
}

impl EventReader {
    /// Create a reader for the journal in the given directory.
    ///
    /// A missing journal file is not an error; it reads as empty.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, EventError> {
        Ok(Self {
            file_path: dir.as_ref().join(JOURNAL_FILE),
        })
    }

    /// Read all records in order, verifying the gapless sequence
    pub fn read_all(&self) -> Result<Vec<EventRecord>, EventError> {
        let mut records = Vec::new();

        if !self.file_path.exists() {
            return Ok(records);
        }

        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: EventRecord = serde_json::from_str(&line)?;

            let expected = records.len() as u64 + 1;
            if record.sequence != expected {
                return Err(EventError::OutOfOrder {
                    expected,
                    actual: record.sequence,
                });
            }

            records.push(record);
        }

        Ok(records)
    }

    /// Sequence number of the last record, if any
    pub fn last_sequence(&self) -> Result<Option<u64>, EventError> {
        Ok(self.read_all()?.last().map(|record| record.sequence))
    }

    /// Count of journaled records
    pub fn count(&self) -> Result<usize, EventError> {
        Ok(self.read_all()?.len())
    }
}
