//! Store configuration.
//!
//! [`StoreConfig`] is deserializable with every field defaulted, so a host
//! application can embed it in its own configuration file and only override
//! what it needs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_HASH_COST, DEFAULT_SNAPSHOT_FILE, MAX_HASH_COST, MIN_HASH_COST};

/// Errors raised while validating a [`StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid hash cost {cost}: must be between {min} and {max}")]
    InvalidHashCost { cost: u32, min: u32, max: u32 },
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}

/// Configuration for a [`UserStore`](crate::user::UserStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Location of the JSON snapshot.
    pub path: PathBuf,

    /// bcrypt work factor used for new password hashes.
    pub hash_cost: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

impl StoreConfig {
    /// Default configuration pointing at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::default().with_path(path)
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Check that the configuration can be used to open a store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.hash_cost) {
            return Err(ConfigError::InvalidHashCost {
                cost: self.hash_cost,
                min: MIN_HASH_COST,
                max: MAX_HASH_COST,
            });
        }
        Ok(())
    }
}
