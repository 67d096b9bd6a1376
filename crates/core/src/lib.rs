//! Quorum Core - Domain types
//!
//! This crate contains the fundamental types used across Quorum:
//! - `OwnerId`: opaque principal identifier
//! - `TargetId`: opaque dispatch destination identifier
//! - `Amount`: non-negative decimal wrapper for transaction values
//! - `Payload`: opaque byte sequence, hex-encoded at the boundary

pub mod amount;
pub mod owner;
pub mod payload;
pub mod target;

pub use amount::Amount;
pub use owner::OwnerId;
pub use payload::Payload;
pub use target::TargetId;
