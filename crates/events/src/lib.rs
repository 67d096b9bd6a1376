//! Quorum Events - append-only JSONL event journal
//!
//! Persists the wallet's observable event log, one JSON record per
//! line. The journal is the source of truth for rebuilding engine
//! state; the engine itself never reads it.

pub mod error;
pub mod reader;
pub mod store;

pub use error::EventError;
pub use reader::EventReader;
pub use store::{EventJournal, EventRecord};
