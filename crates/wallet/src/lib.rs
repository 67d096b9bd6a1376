//! Quorum Wallet - Multi-party authorization engine
//!
//! This is the HEART of Quorum. A fixed owner set must jointly approve,
//! via a quorum threshold, before any proposed transaction is dispatched.
//!
//! # Key Types
//! - `OwnerRegistry`: immutable owner set + threshold, membership queries
//! - `TransactionStore`: append-only list of proposed transactions
//! - `WalletEngine`: the confirm/revoke/execute state machine
//! - `ExecutionGateway`: dispatch seam to the host environment
//! - `WalletEvent`: append-only observable log entries

pub mod engine;
pub mod error;
pub mod event;
pub mod gateway;
pub mod registry;
pub mod store;

pub use engine::WalletEngine;
pub use error::WalletError;
pub use event::WalletEvent;
pub use gateway::{ExecutionGateway, GatewayError, NoopGateway};
pub use registry::{ConfigError, OwnerRegistry};
pub use store::{Transaction, TransactionStore, TxId, TxState};
