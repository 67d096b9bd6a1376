//! Transaction store - append-only list of proposed transactions
//!
//! Transactions are keyed by a sequential, gapless id equal to the
//! pre-insertion count. They are never removed.

use crate::error::WalletError;
use chrono::{DateTime, Utc};
use quorum_core::{Amount, OwnerId, Payload, TargetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sequential transaction identifier, assigned from 0 in submission order
pub type TxId = u64;

/// Lifecycle state of a stored transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxState {
    /// Confirmation count below the threshold
    Pending,
    /// Threshold reached, awaiting an explicit execute call
    Ready,
    /// Dispatched successfully. Terminal: no transition leaves this state
    Executed,
}

/// A proposed transaction awaiting confirmations.
///
/// The confirmation count is the size of the `confirmed` set, so the
/// count can never disagree with the per-owner confirmation relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential id (position in the store)
    pub id: TxId,

    /// Dispatch destination
    pub target: TargetId,

    /// Value forwarded to the target
    pub value: Amount,

    /// Opaque call data forwarded to the target
    pub payload: Payload,

    /// Set once execution has succeeded; never reverts
    pub executed: bool,

    /// Owners holding an active confirmation
    pub confirmed: BTreeSet<OwnerId>,

    /// Owner that proposed the transaction
    pub submitted_by: OwnerId,

    /// When the transaction was proposed
    pub submitted_at: DateTime<Utc>,
}

impl Transaction {
    /// Number of active confirmations
    pub fn confirmation_count(&self) -> usize {
        self.confirmed.len()
    }

    /// Whether the given owner holds an active confirmation
    pub fn is_confirmed_by(&self, owner: &OwnerId) -> bool {
        self.confirmed.contains(owner)
    }

    /// Derive the lifecycle state for the given threshold
    pub fn state(&self, threshold: usize) -> TxState {
        if self.executed {
            TxState::Executed
        } else if self.confirmation_count() >= threshold {
            TxState::Ready
        } else {
            TxState::Pending
        }
    }
}

/// Append-only transaction list
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new transaction; the id equals the pre-insertion count.
    ///
    /// Membership of the submitter is enforced by the engine so that
    /// every mutating operation shares a single access-control path.
    pub fn append(
        &mut self,
        target: TargetId,
        value: Amount,
        payload: Payload,
        submitted_by: OwnerId,
    ) -> TxId {
        let id = self.transactions.len() as TxId;
        self.transactions.push(Transaction {
            id,
            target,
            value,
            payload,
            executed: false,
            confirmed: BTreeSet::new(),
            submitted_by,
            submitted_at: Utc::now(),
        });
        id
    }

    /// Get a transaction by id
    pub fn get(&self, id: TxId) -> Result<&Transaction, WalletError> {
        self.transactions
            .get(id as usize)
            .ok_or(WalletError::TxNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: TxId) -> Result<&mut Transaction, WalletError> {
        self.transactions
            .get_mut(id as usize)
            .ok_or(WalletError::TxNotFound(id))
    }

    /// Number of transactions ever submitted. Monotonically non-decreasing.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate transactions in submission order
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn owner(id: &str) -> OwnerId {
        id.parse().unwrap()
    }

    fn append_test_tx(store: &mut TransactionStore) -> TxId {
        store.append(
            "greeter".parse().unwrap(),
            Amount::new(Decimal::ZERO).unwrap(),
            Payload::empty(),
            owner("alice"),
        )
    }

    #[test]
    fn test_ids_are_sequential_and_gapless() {
        let mut store = TransactionStore::new();

        assert_eq!(append_test_tx(&mut store), 0);
        assert_eq!(append_test_tx(&mut store), 1);
        assert_eq!(append_test_tx(&mut store), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_new_transaction_starts_unconfirmed() {
        let mut store = TransactionStore::new();
        let id = append_test_tx(&mut store);

        let tx = store.get(id).unwrap();
        assert!(!tx.executed);
        assert_eq!(tx.confirmation_count(), 0);
        assert_eq!(tx.submitted_by, owner("alice"));
    }

    #[test]
    fn test_get_out_of_range() {
        let store = TransactionStore::new();
        assert_eq!(store.get(0), Err(WalletError::TxNotFound(0)));
    }

    #[test]
    fn test_state_transitions() {
        let mut store = TransactionStore::new();
        let id = append_test_tx(&mut store);

        assert_eq!(store.get(id).unwrap().state(2), TxState::Pending);

        let tx = store.get_mut(id).unwrap();
        tx.confirmed.insert(owner("alice"));
        tx.confirmed.insert(owner("bob"));
        assert_eq!(store.get(id).unwrap().state(2), TxState::Ready);

        store.get_mut(id).unwrap().executed = true;
        assert_eq!(store.get(id).unwrap().state(2), TxState::Executed);
    }

    #[test]
    fn test_count_matches_confirmed_set() {
        let mut store = TransactionStore::new();
        let id = append_test_tx(&mut store);

        let tx = store.get_mut(id).unwrap();
        tx.confirmed.insert(owner("alice"));
        tx.confirmed.insert(owner("alice"));
        tx.confirmed.insert(owner("bob"));

        let tx = store.get(id).unwrap();
        assert_eq!(tx.confirmation_count(), tx.confirmed.len());
        assert_eq!(tx.confirmation_count(), 2);
    }
}
