//! TargetId - Opaque dispatch destination identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing target identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetIdError {
    #[error("Empty target identifier")]
    Empty,

    #[error("Target identifier contains whitespace: {0:?}")]
    ContainsWhitespace(String),
}

/// Destination of a dispatched transaction.
///
/// The engine treats targets as opaque; only the execution gateway
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Result<Self, TargetIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TargetIdError::Empty);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(TargetIdError::ContainsWhitespace(id));
        }
        Ok(Self(id))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TargetId {
    type Err = TargetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TargetId {
    type Error = TargetIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TargetId> for String {
    fn from(id: TargetId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_target() {
        let target: TargetId = "greeter".parse().unwrap();
        assert_eq!(target.as_str(), "greeter");
    }

    #[test]
    fn test_invalid_targets() {
        assert_eq!(TargetId::new(""), Err(TargetIdError::Empty));
        assert!(matches!(
            TargetId::new("a b"),
            Err(TargetIdError::ContainsWhitespace(_))
        ));
    }
}
