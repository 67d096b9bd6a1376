//! Wallet events for the append-only observable log
//!
//! The engine writes these; it never reads them back. External
//! consumers (the journal, tests, monitors) replay them in order.

use crate::store::TxId;
use chrono::{DateTime, Utc};
use quorum_core::{Amount, OwnerId, Payload, TargetId};
use serde::{Deserialize, Serialize};

/// Events emitted by the wallet engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletEvent {
    /// A transaction was proposed
    Submitted {
        /// Assigned sequential id
        id: TxId,
        /// Owner that proposed the transaction
        caller: OwnerId,
        /// Dispatch destination
        target: TargetId,
        /// Value forwarded on execution
        value: Amount,
        /// Opaque call data forwarded on execution
        payload: Payload,
        /// When the event was emitted
        timestamp: DateTime<Utc>,
    },

    /// An owner confirmed a pending transaction
    Confirmed {
        id: TxId,
        caller: OwnerId,
        timestamp: DateTime<Utc>,
    },

    /// An owner withdrew a prior confirmation
    Revoked {
        id: TxId,
        caller: OwnerId,
        timestamp: DateTime<Utc>,
    },

    /// A transaction was dispatched successfully
    Executed {
        id: TxId,
        caller: OwnerId,
        target: TargetId,
        value: Amount,
        timestamp: DateTime<Utc>,
    },
}

impl WalletEvent {
    /// Create a Submitted event
    pub fn submitted(
        id: TxId,
        caller: OwnerId,
        target: TargetId,
        value: Amount,
        payload: Payload,
    ) -> Self {
        Self::Submitted {
            id,
            caller,
            target,
            value,
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Create a Confirmed event
    pub fn confirmed(id: TxId, caller: OwnerId) -> Self {
        Self::Confirmed {
            id,
            caller,
            timestamp: Utc::now(),
        }
    }

    /// Create a Revoked event
    pub fn revoked(id: TxId, caller: OwnerId) -> Self {
        Self::Revoked {
            id,
            caller,
            timestamp: Utc::now(),
        }
    }

    /// Create an Executed event
    pub fn executed(id: TxId, caller: OwnerId, target: TargetId, value: Amount) -> Self {
        Self::Executed {
            id,
            caller,
            target,
            value,
            timestamp: Utc::now(),
        }
    }

    /// Event name, as logged
    pub fn name(&self) -> &'static str {
        match self {
            WalletEvent::Submitted { .. } => "Submitted",
            WalletEvent::Confirmed { .. } => "Confirmed",
            WalletEvent::Revoked { .. } => "Revoked",
            WalletEvent::Executed { .. } => "Executed",
        }
    }

    /// The transaction the event refers to
    pub fn tx_id(&self) -> TxId {
        match self {
            WalletEvent::Submitted { id, .. }
            | WalletEvent::Confirmed { id, .. }
            | WalletEvent::Revoked { id, .. }
            | WalletEvent::Executed { id, .. } => *id,
        }
    }

    /// The owner that triggered the event
    pub fn caller(&self) -> &OwnerId {
        match self {
            WalletEvent::Submitted { caller, .. }
            | WalletEvent::Confirmed { caller, .. }
            | WalletEvent::Revoked { caller, .. }
            | WalletEvent::Executed { caller, .. } => caller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_event_names() {
        let alice: OwnerId = "alice".parse().unwrap();
        let target: TargetId = "greeter".parse().unwrap();
        let value = Amount::new(Decimal::ZERO).unwrap();

        let submit = WalletEvent::submitted(
            0,
            alice.clone(),
            target.clone(),
            value,
            Payload::empty(),
        );
        assert_eq!(submit.name(), "Submitted");
        assert_eq!(submit.tx_id(), 0);
        assert_eq!(submit.caller(), &alice);

        assert_eq!(WalletEvent::confirmed(1, alice.clone()).name(), "Confirmed");
        assert_eq!(WalletEvent::revoked(1, alice.clone()).name(), "Revoked");
        assert_eq!(
            WalletEvent::executed(1, alice, target, value).name(),
            "Executed"
        );
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = WalletEvent::confirmed(7, "bob".parse().unwrap());
        let json = serde_json::to_string(&event).unwrap();
        let back: WalletEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
