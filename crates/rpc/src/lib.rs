//! Quorum RPC - CLI orchestrator
//!
//! This crate provides the CLI binary and command orchestration: it
//! wires the on-disk config and event journal to the wallet engine and
//! dispatches approved transactions through the outbox gateway.

pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;

pub use config::WalletConfig;
pub use context::AppContext;
pub use dispatch::{DispatchRecord, OutboxGateway};
