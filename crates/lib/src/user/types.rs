//! Core data types for the user system

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored user.
///
/// This is exactly what lands in the snapshot file. The hash is serialized
/// under the `password` key, so existing snapshots keep loading.
///
/// The record carries the password hash; hand [`PublicUser`] to anything
/// outside the trust boundary instead.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier, also the key of the record in the store
    pub id: String,

    /// Display name, not unique
    pub username: String,

    /// Contact address, used as the login key
    pub email: String,

    /// bcrypt hash of the user's password
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl UserRecord {
    /// Produce the record that results from applying `update` on top of this one.
    ///
    /// Fields present in `update` win, absent ones keep their current value.
    /// The plaintext password inside `update` is never copied; the caller
    /// passes the already hashed replacement as `password_hash`.
    pub fn merged(&self, update: UserUpdate, password_hash: Option<String>) -> UserRecord {
        UserRecord {
            id: self.id.clone(),
            username: update.username.unwrap_or_else(|| self.username.clone()),
            email: update.email.unwrap_or_else(|| self.email.clone()),
            password_hash: password_hash.unwrap_or_else(|| self.password_hash.clone()),
        }
    }

    /// Redacted view without the password hash.
    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Input for creating a user.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Plaintext password, hashed before it is stored
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Partial update of a user.
///
/// The identifier is not part of an update and can never change.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    /// New plaintext password
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// The new password, if the update carries a non-empty one.
    ///
    /// An empty password means "leave unchanged".
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Search filter. Both parts are case-insensitive substring matches and an
/// empty or missing part matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Substring of the username
    pub name: Option<String>,
    /// Substring of the email
    pub email: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Whether `record` passes both filters.
    pub fn matches(&self, record: &UserRecord) -> bool {
        contains_ignore_case(&record.username, self.name.as_deref())
            && contains_ignore_case(&record.email, self.email.as_deref())
    }
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// A user without credentials, safe to return to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&UserRecord> for PublicUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
        }
    }
}

impl From<UserRecord> for PublicUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
        }
    }
}
