//! Amount - Non-negative decimal wrapper for transaction values
//!
//! Every value attached to a proposed transaction MUST be non-negative.
//! This is enforced at the type level.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when working with amounts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}

/// A non-negative decimal value carried by a transaction.
///
/// # Invariant
/// The inner value is always >= 0. This is enforced by the constructor.
///
/// # Example
/// ```
/// use quorum_core::Amount;
/// use rust_decimal::Decimal;
///
/// let value = Amount::new(Decimal::new(250, 0)).unwrap();
/// assert_eq!(value.value(), Decimal::new(250, 0));
///
/// // Negative values are rejected
/// assert!(Amount::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Amount from a Decimal.
    ///
    /// Returns an error if the value is negative.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            Err(AmountError::NegativeAmount(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepted() {
        assert!(Amount::new(Decimal::ZERO).is_ok());
        assert!(Amount::new(Decimal::new(1_000, 0)).is_ok());
    }

    #[test]
    fn test_negative_rejected() {
        let result = Amount::new(Decimal::new(-5, 0));
        assert_eq!(result, Err(AmountError::NegativeAmount(Decimal::new(-5, 0))));
    }

    #[test]
    fn test_zero() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn test_serde_rejects_negative() {
        let result: Result<Amount, _> = serde_json::from_str("\"-10\"");
        assert!(result.is_err());
    }
}
