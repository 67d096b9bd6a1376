//! Wallet engine - the confirm/revoke/execute state machine
//!
//! Coordinates the owner registry, the transaction store, and the
//! execution gateway. Every public operation either runs to completion,
//! mutating state and emitting exactly one event, or fails with state
//! unchanged.
//!
//! Per-transaction states: Pending (count < threshold) and Ready
//! (count >= threshold) are freely revisited as confirmations come and
//! go; Executed is terminal.

use crate::error::WalletError;
use crate::event::WalletEvent;
use crate::gateway::ExecutionGateway;
use crate::registry::OwnerRegistry;
use crate::store::{Transaction, TransactionStore, TxId, TxState};
use quorum_core::{Amount, OwnerId, Payload, TargetId};

/// Multi-party authorization engine.
///
/// Owns the owner set, threshold, transaction list, and confirmation
/// relation; nothing outside mutates them except through the operations
/// below. The engine is strictly serialized: each operation takes
/// `&mut self` and completes before the next can start.
pub struct WalletEngine {
    registry: OwnerRegistry,
    store: TransactionStore,
    log: Vec<WalletEvent>,
}

impl WalletEngine {
    /// Create an engine, validating the owner set and threshold.
    pub fn new(owners: Vec<OwnerId>, threshold: usize) -> Result<Self, WalletError> {
        let registry = OwnerRegistry::new(owners, threshold)?;
        Ok(Self::with_registry(registry))
    }

    /// Create an engine from an already-validated registry
    pub fn with_registry(registry: OwnerRegistry) -> Self {
        Self {
            registry,
            store: TransactionStore::new(),
            log: Vec::new(),
        }
    }

    /// Propose a transaction. Returns the assigned sequential id.
    pub fn submit(
        &mut self,
        caller: &OwnerId,
        target: TargetId,
        value: Amount,
        payload: Payload,
    ) -> Result<TxId, WalletError> {
        self.require_owner(caller)?;

        let id = self
            .store
            .append(target.clone(), value, payload.clone(), caller.clone());

        tracing::debug!(caller = %caller, id, target = %target, "transaction submitted");
        self.log
            .push(WalletEvent::submitted(id, caller.clone(), target, value, payload));

        Ok(id)
    }

    /// Record the caller's confirmation on a pending transaction.
    pub fn confirm(&mut self, caller: &OwnerId, id: TxId) -> Result<(), WalletError> {
        self.require_owner(caller)?;

        let tx = self.store.get_mut(id)?;
        if tx.executed {
            return Err(WalletError::AlreadyExecuted(id));
        }
        if !tx.confirmed.insert(caller.clone()) {
            return Err(WalletError::AlreadyConfirmed {
                id,
                caller: caller.clone(),
            });
        }

        tracing::debug!(caller = %caller, id, count = tx.confirmation_count(), "transaction confirmed");
        self.log.push(WalletEvent::confirmed(id, caller.clone()));

        Ok(())
    }

    /// Withdraw the caller's prior confirmation.
    pub fn revoke(&mut self, caller: &OwnerId, id: TxId) -> Result<(), WalletError> {
        self.require_owner(caller)?;

        let tx = self.store.get_mut(id)?;
        if tx.executed {
            return Err(WalletError::AlreadyExecuted(id));
        }
        if !tx.confirmed.remove(caller) {
            return Err(WalletError::NotConfirmed {
                id,
                caller: caller.clone(),
            });
        }

        tracing::debug!(caller = %caller, id, count = tx.confirmation_count(), "confirmation revoked");
        self.log.push(WalletEvent::revoked(id, caller.clone()));

        Ok(())
    }

    /// Dispatch a transaction that has reached quorum.
    ///
    /// The `executed` flag flips BEFORE the gateway is invoked, so any
    /// nested call against the same id observes the terminal state and
    /// is rejected. A gateway failure rolls the flip back as part of the
    /// same operation; no partial state survives.
    pub fn execute(
        &mut self,
        caller: &OwnerId,
        id: TxId,
        gateway: &mut dyn ExecutionGateway,
    ) -> Result<(), WalletError> {
        self.require_owner(caller)?;

        let need = self.registry.threshold();
        let tx = self.store.get_mut(id)?;
        if tx.executed {
            return Err(WalletError::AlreadyExecuted(id));
        }
        let have = tx.confirmation_count();
        if have < need {
            return Err(WalletError::InsufficientConfirmations { id, have, need });
        }

        tx.executed = true;

        let target = tx.target.clone();
        let value = tx.value;
        let payload = tx.payload.clone();

        if let Err(err) = gateway.invoke(&target, value, &payload) {
            tx.executed = false;
            tracing::warn!(id, reason = %err, "execution failed, state rolled back");
            return Err(WalletError::ExecutionFailed {
                id,
                reason: err.reason,
            });
        }

        tracing::info!(caller = %caller, id, target = %target, value = %value, "transaction executed");
        self.log
            .push(WalletEvent::executed(id, caller.clone(), target, value));

        Ok(())
    }

    /// Owners in construction order
    pub fn owners(&self) -> &[OwnerId] {
        self.registry.owners()
    }

    /// Number of confirmations required before execution
    pub fn required_confirmations(&self) -> usize {
        self.registry.threshold()
    }

    /// Number of transactions ever submitted
    pub fn transaction_count(&self) -> usize {
        self.store.len()
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: TxId) -> Result<&Transaction, WalletError> {
        self.store.get(id)
    }

    /// Transactions in submission order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.store.iter()
    }

    /// Derive the lifecycle state of a transaction
    pub fn state(&self, id: TxId) -> Result<TxState, WalletError> {
        Ok(self.store.get(id)?.state(self.registry.threshold()))
    }

    /// The append-only event log, oldest first. The engine only ever
    /// appends here.
    pub fn events(&self) -> &[WalletEvent] {
        &self.log
    }

    /// The owner registry
    pub fn registry(&self) -> &OwnerRegistry {
        &self.registry
    }

    fn require_owner(&self, caller: &OwnerId) -> Result<(), WalletError> {
        if self.registry.is_owner(caller) {
            Ok(())
        } else {
            Err(WalletError::AccessDenied {
                caller: caller.clone(),
            })
        }
    }
}
