//! Password hashing for the user system
//!
//! Passwords are hashed with bcrypt. Every call draws a fresh random salt,
//! which bcrypt embeds in its encoded output, so a stored hash is
//! self-describing and needs no separate salt column.
//!
//! bcrypt is deliberately slow, so the async entry points move the work onto
//! tokio's blocking pool. Those are the only places a user operation suspends
//! besides snapshot I/O.

use tracing::warn;

use super::errors::UserError;
use crate::Result;

/// Hash a password with the given bcrypt work factor.
///
/// # Arguments
/// * `password` - The plaintext password
/// * `cost` - bcrypt work factor (4..=31)
///
/// # Returns
/// The encoded bcrypt hash (`$2b$<cost>$<salt><hash>`)
pub fn hash_password_blocking(password: impl AsRef<str>, cost: u32) -> Result<String> {
    bcrypt::hash(password.as_ref(), cost).map_err(|e| {
        UserError::HashFailed {
            reason: e.to_string(),
        }
        .into()
    })
}

/// Check a password against an encoded bcrypt hash.
///
/// A stored hash that bcrypt cannot parse never matches; the problem is
/// logged instead of surfaced so callers see the same answer as for a wrong
/// password.
pub fn verify_password_blocking(password: impl AsRef<str>, password_hash: impl AsRef<str>) -> bool {
    match bcrypt::verify(password.as_ref(), password_hash.as_ref()) {
        Ok(matches) => matches,
        Err(e) => {
            warn!(error = %e, "Stored password hash could not be parsed");
            false
        }
    }
}

/// Async wrapper around [`hash_password_blocking`].
pub async fn hash_password(password: impl Into<String>, cost: u32) -> Result<String> {
    let password = password.into();
    tokio::task::spawn_blocking(move || hash_password_blocking(password, cost))
        .await
        .map_err(|e| UserError::HashTaskFailed {
            reason: e.to_string(),
        })?
}

/// Async wrapper around [`verify_password_blocking`].
pub async fn verify_password(
    password: impl Into<String>,
    password_hash: impl Into<String>,
) -> Result<bool> {
    let password = password.into();
    let password_hash = password_hash.into();
    let matches =
        tokio::task::spawn_blocking(move || verify_password_blocking(password, password_hash))
            .await
            .map_err(|e| UserError::HashTaskFailed {
                reason: e.to_string(),
            })?;
    Ok(matches)
}
