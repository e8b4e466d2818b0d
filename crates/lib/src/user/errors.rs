//! Error types for the user system
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    /// The hashing primitive rejected its input.
    #[error("Password hashing failed: {reason}")]
    HashFailed { reason: String },

    /// The blocking task running the hash panicked or was cancelled.
    #[error("Password hashing task failed: {reason}")]
    HashTaskFailed { reason: String },
}

impl UserError {
    /// Check if this error came from the hashing primitive or its worker task.
    pub fn is_hash_error(&self) -> bool {
        matches!(
            self,
            UserError::HashFailed { .. } | UserError::HashTaskFailed { .. }
        )
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
