//! Outbox gateway - file-backed execution dispatcher
//!
//! Stands in for the host environment that carries out an approved
//! transaction's side effect: each successful dispatch appends one
//! record to `outbox.jsonl`. A dispatch either lands as a whole line or
//! fails with nothing written, so the engine can treat any reported
//! failure as total.

use chrono::{DateTime, Utc};
use quorum_core::{Amount, Payload, TargetId};
use quorum_wallet::{ExecutionGateway, GatewayError};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// One dispatched transaction, as handed to the host environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub target: TargetId,
    pub value: Amount,
    pub payload: Payload,
    pub dispatched_at: DateTime<Utc>,
}

/// Gateway that appends every dispatch to an outbox file
pub struct OutboxGateway {
    path: PathBuf,
}

impl OutboxGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read back every dispatched record, oldest first
    pub fn read_all(&self) -> Result<Vec<DispatchRecord>, anyhow::Error> {
        let mut records = Vec::new();

        if !self.path.exists() {
            return Ok(records);
        }

        let file = File::open(&self.path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }

        Ok(records)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExecutionGateway for OutboxGateway {
    fn invoke(
        &mut self,
        target: &TargetId,
        value: Amount,
        payload: &Payload,
    ) -> Result<(), GatewayError> {
        let record = DispatchRecord {
            target: target.clone(),
            value,
            payload: payload.clone(),
            dispatched_at: Utc::now(),
        };

        let json = serde_json::to_string(&record)
            .map_err(|e| GatewayError::new(format!("outbox serialization failed: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| GatewayError::new(format!("outbox open failed: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| GatewayError::new(format!("outbox write failed: {}", e)))?;

        tracing::info!(target = %target, value = %value, "dispatched to outbox");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_dispatch_appends_record() {
        let dir = TempDir::new().unwrap();
        let mut gateway = OutboxGateway::new(dir.path().join("outbox.jsonl"));

        let target: TargetId = "greeter".parse().unwrap();
        let value = Amount::new(dec!(5)).unwrap();
        let payload = Payload::from_hex("a413").unwrap();

        gateway.invoke(&target, value, &payload).unwrap();
        gateway.invoke(&target, value, &payload).unwrap();

        let records = gateway.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].target, target);
        assert_eq!(records[0].value, value);
        assert_eq!(records[0].payload, payload);
    }

    #[test]
    fn test_missing_outbox_reads_empty() {
        let dir = TempDir::new().unwrap();
        let gateway = OutboxGateway::new(dir.path().join("outbox.jsonl"));
        assert!(gateway.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_path_reports_failure() {
        let dir = TempDir::new().unwrap();
        // A directory where the outbox file should be
        let path = dir.path().join("outbox.jsonl");
        std::fs::create_dir(&path).unwrap();

        let mut gateway = OutboxGateway::new(&path);
        let result = gateway.invoke(
            &"greeter".parse().unwrap(),
            Amount::new(dec!(0)).unwrap(),
            &Payload::empty(),
        );
        assert!(result.is_err());
    }
}
