//! Payload - Opaque call data for dispatched transactions
//!
//! The engine never interprets payload bytes; validity is solely the
//! execution gateway's concern. The boundary representation is a hex
//! string, which keeps payloads printable in events, logs, and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when decoding payloads
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    #[error("Invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Opaque byte sequence attached to a transaction. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Create a payload from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The empty payload
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Decode a payload from a hex string (with or without a `0x` prefix)
    pub fn from_hex(s: &str) -> Result<Self, PayloadError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        Ok(Self(hex::decode(s)?))
    }

    /// Hex encoding of the payload bytes
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// The raw bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Payload {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Payload {
    type Error = PayloadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Payload> for String {
    fn from(payload: Payload) -> Self {
        payload.to_hex()
    }
}
