//!
//! userstore: a small user-record store with password authentication.
//!
//! ## Core Concepts
//!
//! * **Records (`user::UserRecord`)**: A user's id, display name, email and bcrypt password hash.
//! * **Store (`user::UserStore`)**: Owns the records in memory, keyed by id, and rewrites the whole
//!   JSON snapshot after every mutation. Lookups serve the in-memory copy; `search` reads the
//!   snapshot fresh from disk.
//! * **Credentials (`user::crypto`)**: Salted bcrypt hashing and verification, run on tokio's
//!   blocking pool.
//! * **Configuration (`config::StoreConfig`)**: Snapshot location and bcrypt work factor.
//!
//! Persistence failures never reach the caller: an unreadable snapshot opens as an empty store
//! and a failed write is logged while the in-memory change stands. Hashing failures are returned
//! as errors from the operation that needed the hash.

pub mod config;
pub mod constants;
pub mod user;

pub use config::{ConfigError, StoreConfig};
pub use user::{NewUser, PublicUser, SearchQuery, UserRecord, UserStore, UserUpdate};

/// Result type used throughout the userstore library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the userstore library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from the user module (hashing)
    #[error(transparent)]
    User(user::UserError),

    /// Structured snapshot errors from the persistence module
    #[error(transparent)]
    Persistence(user::PersistenceError),

    /// Invalid store configuration
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::User(_) => "user",
            Error::Persistence(_) => "persistence",
            Error::Config(_) => "config",
        }
    }

    /// Check if this error came from password hashing.
    pub fn is_hash_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_hash_error(),
            _ => false,
        }
    }

    /// Check if this error indicates the snapshot does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Persistence(persistence_err) => persistence_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is snapshot-related.
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }

    /// Check if this error is a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
