//! Wallet errors
//!
//! Every failure is synchronous, local to the call, and leaves engine
//! state unchanged.

use crate::registry::ConfigError;
use crate::store::TxId;
use quorum_core::OwnerId;
use thiserror::Error;

/// Errors that can occur in wallet operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Access denied: {caller} is not an owner")]
    AccessDenied { caller: OwnerId },

    #[error("Transaction not found: {0}")]
    TxNotFound(TxId),

    #[error("Transaction {id} already confirmed by {caller}")]
    AlreadyConfirmed { id: TxId, caller: OwnerId },

    #[error("Transaction {id} not confirmed by {caller}")]
    NotConfirmed { id: TxId, caller: OwnerId },

    #[error("Transaction {0} already executed")]
    AlreadyExecuted(TxId),

    #[error("Transaction {id} has {have} of {need} required confirmations")]
    InsufficientConfirmations { id: TxId, have: usize, need: usize },

    #[error("Execution of transaction {id} failed: {reason}")]
    ExecutionFailed { id: TxId, reason: String },
}
