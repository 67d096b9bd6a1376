//! Owner registry - immutable principal set and quorum threshold
//!
//! The owner set and threshold are fixed at construction. Every
//! mutating engine operation consults `is_owner` first.

use quorum_core::OwnerId;
use thiserror::Error;

/// Errors from registry construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Owner set cannot be empty")]
    NoOwners,

    #[error("Duplicate owner: {0}")]
    DuplicateOwner(OwnerId),

    #[error("Threshold {threshold} out of range [1, {owners}]")]
    ThresholdOutOfRange { threshold: usize, owners: usize },
}

/// The immutable owner set and quorum threshold.
///
/// Owners keep their construction order; `owners()` is stable across
/// the registry's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRegistry {
    owners: Vec<OwnerId>,
    threshold: usize,
}

impl OwnerRegistry {
    /// Create a registry, validating the owner set and threshold.
    pub fn new(owners: Vec<OwnerId>, threshold: usize) -> Result<Self, ConfigError> {
        if owners.is_empty() {
            return Err(ConfigError::NoOwners);
        }

        for (i, owner) in owners.iter().enumerate() {
            if owners[..i].contains(owner) {
                return Err(ConfigError::DuplicateOwner(owner.clone()));
            }
        }

        if threshold < 1 || threshold > owners.len() {
            return Err(ConfigError::ThresholdOutOfRange {
                threshold,
                owners: owners.len(),
            });
        }

        Ok(Self { owners, threshold })
    }

    /// Check whether an identifier belongs to the owner set
    pub fn is_owner(&self, id: &OwnerId) -> bool {
        self.owners.contains(id)
    }

    /// Owners in construction order
    pub fn owners(&self) -> &[OwnerId] {
        &self.owners
    }

    /// Number of confirmations required before execution
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of owners
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(id: &str) -> OwnerId {
        id.parse().unwrap()
    }

    #[test]
    fn test_valid_registry() {
        let registry = OwnerRegistry::new(vec![owner("alice"), owner("bob")], 2).unwrap();

        assert_eq!(registry.owners(), &[owner("alice"), owner("bob")]);
        assert_eq!(registry.threshold(), 2);
        assert_eq!(registry.len(), 2);
        assert!(registry.is_owner(&owner("alice")));
        assert!(!registry.is_owner(&owner("carol")));
    }

    #[test]
    fn test_owner_order_is_stable() {
        let registry =
            OwnerRegistry::new(vec![owner("zara"), owner("alice"), owner("bob")], 1).unwrap();
        assert_eq!(
            registry.owners(),
            &[owner("zara"), owner("alice"), owner("bob")]
        );
    }

    #[test]
    fn test_empty_owner_set_rejected() {
        assert_eq!(OwnerRegistry::new(vec![], 1), Err(ConfigError::NoOwners));
    }

    #[test]
    fn test_duplicate_owner_rejected() {
        let result = OwnerRegistry::new(vec![owner("alice"), owner("alice")], 1);
        assert_eq!(result, Err(ConfigError::DuplicateOwner(owner("alice"))));
    }

    #[test]
    fn test_threshold_zero_rejected() {
        let result = OwnerRegistry::new(vec![owner("alice")], 0);
        assert_eq!(
            result,
            Err(ConfigError::ThresholdOutOfRange {
                threshold: 0,
                owners: 1
            })
        );
    }

    #[test]
    fn test_threshold_above_owner_count_rejected() {
        // Scenario: single owner, threshold 2
        let result = OwnerRegistry::new(vec![owner("alice")], 2);
        assert_eq!(
            result,
            Err(ConfigError::ThresholdOutOfRange {
                threshold: 2,
                owners: 1
            })
        );
    }

    #[test]
    fn test_threshold_equal_to_owner_count_accepted() {
        let registry = OwnerRegistry::new(vec![owner("alice"), owner("bob")], 2).unwrap();
        assert_eq!(registry.threshold(), 2);
    }
}
