//! Wallet configuration - owner set and threshold on disk
//!
//! Written once by `init`; the owner set and threshold never change
//! afterwards.

use quorum_core::OwnerId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// Persisted wallet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    pub owners: Vec<OwnerId>,
    pub threshold: usize,
}

impl WalletConfig {
    /// Path of the config file inside the data directory
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Check whether a wallet has been initialized in the data directory
    pub fn exists(data_dir: &Path) -> bool {
        Self::path(data_dir).exists()
    }

    /// Load the configuration, failing if the wallet is uninitialized
    pub fn load(data_dir: &Path) -> Result<Self, anyhow::Error> {
        let path = Self::path(data_dir);
        let json = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Wallet not initialized at {} ({}); run `init` first", path.display(), e)
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the configuration. Fails if one already exists: the owner
    /// set is fixed at construction.
    pub fn save(&self, data_dir: &Path) -> Result<(), anyhow::Error> {
        fs::create_dir_all(data_dir)?;
        let path = Self::path(data_dir);
        if path.exists() {
            anyhow::bail!("Wallet already initialized at {}", path.display());
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> WalletConfig {
        WalletConfig {
            owners: vec!["alice".parse().unwrap(), "bob".parse().unwrap()],
            threshold: 2,
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        config().save(dir.path()).unwrap();

        let loaded = WalletConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.owners, config().owners);
        assert_eq!(loaded.threshold, 2);
        assert!(WalletConfig::exists(dir.path()));
    }

    #[test]
    fn test_load_uninitialized_fails() {
        let dir = TempDir::new().unwrap();
        let result = WalletConfig::load(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_double_save_rejected() {
        let dir = TempDir::new().unwrap();
        config().save(dir.path()).unwrap();
        assert!(config().save(dir.path()).is_err());
    }
}
