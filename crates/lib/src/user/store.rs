//! The user store.
//!
//! [`UserStore`] owns the in-memory record set and the location of its
//! snapshot. The set is loaded once when the store is opened and written back
//! in full after every create, update and remove.
//!
//! Mutations take `&mut self`. The store does no locking of its own; a host
//! that shares it between tasks must serialize access itself, and the last
//! snapshot written wins.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{
    crypto,
    id::{random_id, unique_id},
    persistence::{Users, load_fresh, load_or_empty, save_or_log},
    types::{NewUser, SearchQuery, UserRecord, UserUpdate},
};
use crate::{Result, config::StoreConfig};

/// In-memory user store backed by a JSON snapshot.
#[derive(Debug)]
pub struct UserStore {
    users: Users,
    path: PathBuf,
    hash_cost: u32,
}

impl UserStore {
    /// Open a store, loading the snapshot named by `config`.
    ///
    /// A missing or unreadable snapshot is logged and yields an empty store.
    /// Only an invalid configuration is an error.
    pub async fn open(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let users = load_or_empty(&config.path).await;
        Ok(Self {
            users,
            path: config.path,
            hash_cost: config.hash_cost,
        })
    }

    /// Open a store at `path` with default settings.
    pub async fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(StoreConfig::new(path)).await
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replace the cached records with a fresh read of the snapshot.
    pub async fn reload(&mut self) {
        self.users = load_or_empty(&self.path).await;
    }

    /// All cached records, in no particular order.
    pub async fn find_all(&self) -> Vec<UserRecord> {
        self.users.values().cloned().collect()
    }

    /// The record stored under `id`, if any.
    pub async fn find_one(&self, id: &str) -> Option<UserRecord> {
        self.users.get(id).cloned()
    }

    /// Create a user with a fresh identifier and a hashed password.
    ///
    /// The returned record contains the password hash.
    pub async fn create(&mut self, input: NewUser) -> Result<UserRecord> {
        let id = unique_id(|id| self.users.contains_key(id), random_id);
        let password_hash = crypto::hash_password(input.password, self.hash_cost).await?;

        let record = UserRecord {
            id: id.clone(),
            username: input.username,
            email: input.email,
            password_hash,
        };
        self.users.insert(id.clone(), record.clone());
        self.save().await;

        info!(user_id = %id, "Created user");
        Ok(record)
    }

    /// Apply a partial update to the user stored under `id`.
    ///
    /// Returns `Ok(None)` if there is no such user. A non-empty password in
    /// `update` is hashed before it is merged.
    pub async fn update(&mut self, id: &str, update: UserUpdate) -> Result<Option<UserRecord>> {
        let Some(existing) = self.users.get(id) else {
            debug!(user_id = %id, "Update for unknown user");
            return Ok(None);
        };

        let password_hash = match update.new_password() {
            Some(password) => Some(crypto::hash_password(password, self.hash_cost).await?),
            None => None,
        };
        let merged = existing.merged(update, password_hash);

        self.users.insert(merged.id.clone(), merged.clone());
        self.save().await;

        info!(user_id = %id, "Updated user");
        Ok(Some(merged))
    }

    /// Delete the user stored under `id`. Unknown ids are ignored.
    pub async fn remove(&mut self, id: &str) {
        if self.users.remove(id).is_none() {
            debug!(user_id = %id, "Remove for unknown user");
            return;
        }
        self.save().await;
        info!(user_id = %id, "Removed user");
    }

    /// The first cached user whose email equals `email` exactly.
    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.values().find(|user| user.email == email).cloned()
    }

    /// Check a login attempt.
    ///
    /// Returns the user when `password` matches the stored hash. An unknown
    /// email and a wrong password both give `Ok(None)`.
    pub async fn compare_password(&self, email: &str, password: &str) -> Result<Option<UserRecord>> {
        let Some(user) = self.find_by_email(email).await else {
            return Ok(None);
        };

        if crypto::verify_password(password, user.password_hash.clone()).await? {
            Ok(Some(user))
        } else {
            debug!(user_id = %user.id, "Password mismatch");
            Ok(None)
        }
    }

    /// Search the snapshot on disk.
    ///
    /// This reads the file again instead of using the cached records, so
    /// changes made to the file by another process show up here even though
    /// the other lookups keep serving the cache.
    pub async fn search(&self, query: &SearchQuery) -> Vec<UserRecord> {
        load_fresh(&self.path)
            .await
            .into_values()
            .filter(|user| query.matches(user))
            .collect()
    }

    async fn save(&self) {
        save_or_log(&self.path, &self.users).await;
    }
}
