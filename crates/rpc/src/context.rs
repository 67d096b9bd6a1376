//! Application context - wires everything together
//!
//! Layout under the data directory:
//! - `config.json`    owner set + threshold, written once by `init`
//! - `journal/`       append-only event journal (source of truth)
//! - `outbox.jsonl`   dispatched transactions, written by the gateway
//!
//! On open the context replays the journal through the engine's public
//! operations to rebuild its state; executions replay through a noop
//! gateway so side effects never fire twice.

use crate::config::WalletConfig;
use crate::dispatch::OutboxGateway;
use quorum_core::{Amount, OwnerId, Payload, TargetId};
use quorum_events::{EventJournal, EventReader};
use quorum_wallet::{
    ExecutionGateway, NoopGateway, OwnerRegistry, TxId, WalletEngine, WalletError, WalletEvent,
};
use std::path::{Path, PathBuf};

/// Application context - wires config, journal, engine, and gateway
pub struct AppContext {
    engine: WalletEngine,
    journal: EventJournal,
    /// Events up to this index are already journaled (the replayed prefix)
    persisted: usize,
    data_dir: PathBuf,
}

impl AppContext {
    /// Initialize a wallet: validate and persist the configuration.
    ///
    /// Validation happens before anything is written, so an invalid
    /// owner set or threshold leaves the data directory untouched.
    pub fn init(
        data_dir: impl AsRef<Path>,
        owners: Vec<OwnerId>,
        threshold: usize,
    ) -> Result<WalletConfig, anyhow::Error> {
        OwnerRegistry::new(owners.clone(), threshold).map_err(WalletError::InvalidConfig)?;

        let config = WalletConfig { owners, threshold };
        config.save(data_dir.as_ref())?;
        Ok(config)
    }

    /// Open an initialized wallet, rebuilding engine state from the journal
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let journal_dir = data_dir.join("journal");

        let config = WalletConfig::load(&data_dir)?;
        let registry = OwnerRegistry::new(config.owners, config.threshold)?;
        let mut engine = WalletEngine::with_registry(registry);

        let records = EventReader::open(&journal_dir)?.read_all()?;
        let mut replay_gateway = NoopGateway;
        for record in &records {
            Self::apply(&mut engine, &record.event, &mut replay_gateway)?;
        }
        tracing::debug!(events = records.len(), "journal replayed");

        let persisted = engine.events().len();
        let journal = EventJournal::open(&journal_dir)?;

        Ok(Self {
            engine,
            journal,
            persisted,
            data_dir,
        })
    }

    /// Propose a transaction and journal the resulting event
    pub fn submit(
        &mut self,
        caller: &OwnerId,
        target: TargetId,
        value: Amount,
        payload: Payload,
    ) -> Result<TxId, anyhow::Error> {
        let id = self.engine.submit(caller, target, value, payload)?;
        self.flush_events()?;
        Ok(id)
    }

    /// Confirm a transaction and journal the resulting event
    pub fn confirm(&mut self, caller: &OwnerId, id: TxId) -> Result<(), anyhow::Error> {
        self.engine.confirm(caller, id)?;
        self.flush_events()
    }

    /// Revoke a confirmation and journal the resulting event
    pub fn revoke(&mut self, caller: &OwnerId, id: TxId) -> Result<(), anyhow::Error> {
        self.engine.revoke(caller, id)?;
        self.flush_events()
    }

    /// Execute a transaction through the outbox gateway
    pub fn execute(&mut self, caller: &OwnerId, id: TxId) -> Result<(), anyhow::Error> {
        let mut gateway = self.outbox();
        self.engine.execute(caller, id, &mut gateway)?;
        self.flush_events()
    }

    /// The wallet engine (read access)
    pub fn engine(&self) -> &WalletEngine {
        &self.engine
    }

    /// The outbox gateway for this wallet's data directory
    pub fn outbox(&self) -> OutboxGateway {
        OutboxGateway::new(self.data_dir.join("outbox.jsonl"))
    }

    /// The journal directory for this wallet's data directory
    pub fn journal_dir(&self) -> PathBuf {
        self.data_dir.join("journal")
    }

    /// Re-drive one journaled event through the engine's public operations
    fn apply(
        engine: &mut WalletEngine,
        event: &WalletEvent,
        gateway: &mut dyn ExecutionGateway,
    ) -> Result<(), anyhow::Error> {
        match event {
            WalletEvent::Submitted {
                caller,
                target,
                value,
                payload,
                ..
            } => {
                engine.submit(caller, target.clone(), *value, payload.clone())?;
            }
            WalletEvent::Confirmed { id, caller, .. } => engine.confirm(caller, *id)?,
            WalletEvent::Revoked { id, caller, .. } => engine.revoke(caller, *id)?,
            WalletEvent::Executed { id, caller, .. } => engine.execute(caller, *id, gateway)?,
        }
        Ok(())
    }

    /// Journal engine events past the persistence watermark
    fn flush_events(&mut self) -> Result<(), anyhow::Error> {
        for event in &self.engine.events()[self.persisted..] {
            self.journal.append(event)?;
        }
        self.persisted = self.engine.events().len();
        Ok(())
    }
}
