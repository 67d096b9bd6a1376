//! OwnerId - Opaque principal identifier
//!
//! Owners arrive already authenticated; the engine only ever compares
//! identifiers for equality and membership. The identifier text is
//! preserved verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing owner identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwnerIdError {
    #[error("Empty owner identifier")]
    Empty,

    #[error("Owner identifier contains whitespace: {0:?}")]
    ContainsWhitespace(String),
}

/// An authorized participant's identifier.
///
/// # Invariant
/// Non-empty and free of whitespace. Enforced by the constructor.
///
/// # Example
/// ```
/// use quorum_core::OwnerId;
///
/// let alice: OwnerId = "alice".parse().unwrap();
/// assert_eq!(alice.as_str(), "alice");
///
/// let bad: Result<OwnerId, _> = "".parse();
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerId(String);

impl OwnerId {
    /// Create a new OwnerId, validating the identifier text.
    pub fn new(id: impl Into<String>) -> Result<Self, OwnerIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OwnerIdError::Empty);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(OwnerIdError::ContainsWhitespace(id));
        }
        Ok(Self(id))
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = OwnerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OwnerId {
    type Error = OwnerIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OwnerId> for String {
    fn from(id: OwnerId) -> Self {
        id.0
    }
}
