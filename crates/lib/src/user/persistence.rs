//! Snapshot persistence for the user store
//!
//! The whole record set lives in a single JSON object mapping each user id
//! to its record. Every save rewrites the file in full; there is no append
//! log and no atomic rename, so a crash mid-write can leave a truncated file
//! behind. Such a file is treated like any other unreadable snapshot on the
//! next load.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::UserRecord;
use crate::Result;

/// In-memory record set, keyed by user id.
pub type Users = HashMap<String, UserRecord>;

/// Errors that can occur while reading or writing the snapshot file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The snapshot file does not exist.
    #[error("Snapshot not found: {}", path.display())]
    NotFound {
        /// Location that was probed
        path: PathBuf,
    },

    /// The snapshot file exists but could not be read.
    #[error("Failed to read snapshot {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot content is not a valid record map.
    #[error("Malformed snapshot {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record set could not be encoded.
    #[error("Failed to serialize snapshot")]
    SerializeFailed {
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot file could not be written.
    #[error("Failed to write snapshot {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Check if the snapshot simply did not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound { .. })
    }

    /// Check if this error happened while loading.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            PersistenceError::NotFound { .. }
                | PersistenceError::ReadFailed { .. }
                | PersistenceError::Malformed { .. }
        )
    }

    /// Check if this error happened while saving.
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            PersistenceError::SerializeFailed { .. } | PersistenceError::WriteFailed { .. }
        )
    }
}

impl From<PersistenceError> for crate::Error {
    fn from(err: PersistenceError) -> Self {
        crate::Error::Persistence(err)
    }
}

/// Loads the record set from a JSON snapshot.
///
/// Records stored under a key that differs from their own `id` are re-keyed
/// by `id`, so the returned map always satisfies `map[k].id == k`.
pub async fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Users> {
    let path = path.as_ref();
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PersistenceError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(source) => {
            return Err(PersistenceError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
            .into());
        }
    };

    let raw: Users = serde_json::from_str(&json).map_err(|source| PersistenceError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut users = Users::with_capacity(raw.len());
    for (key, record) in raw {
        if key != record.id {
            warn!(key = %key, user_id = %record.id, "Snapshot key does not match record id, re-keying");
        }
        users.insert(record.id.clone(), record);
    }
    Ok(users)
}

/// Saves the entire record set to `path`, replacing any previous content.
pub async fn save_snapshot<P: AsRef<Path>>(path: P, users: &Users) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(users)
        .map_err(|source| PersistenceError::SerializeFailed { source })?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| PersistenceError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}

/// Loads the snapshot at startup or on reload, falling back to an empty
/// record set on any failure.
pub(crate) async fn load_or_empty(path: &Path) -> Users {
    match load_snapshot(path).await {
        Ok(users) => {
            info!(path = %path.display(), count = users.len(), "Loaded user snapshot");
            users
        }
        Err(e) if e.is_not_found() => {
            info!(path = %path.display(), "No user snapshot found, starting empty");
            Users::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = ?e, "Failed to load user snapshot, starting empty");
            Users::new()
        }
    }
}

/// Reads the snapshot for a single query, bypassing the store's cache.
///
/// Same recovery as [`load_or_empty`], but routine reads stay at `debug`.
pub(crate) async fn load_fresh(path: &Path) -> Users {
    match load_snapshot(path).await {
        Ok(users) => {
            debug!(path = %path.display(), count = users.len(), "Read user snapshot");
            users
        }
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "No user snapshot to read");
            Users::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = ?e, "Failed to read user snapshot, using empty set");
            Users::new()
        }
    }
}

/// Saves the snapshot, logging instead of returning a failure.
///
/// On failure the caller's in-memory state stays ahead of the file until
/// the next successful save.
pub(crate) async fn save_or_log(path: &Path, users: &Users) {
    match save_snapshot(path, users).await {
        Ok(()) => {
            debug!(path = %path.display(), count = users.len(), "Saved user snapshot");
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = ?e, "Failed to save user snapshot");
        }
    }
}
