//! Constants used throughout the userstore library.
//!
//! Central definitions for file names and hashing parameters so the store,
//! its configuration and the tests agree on the same defaults.

/// Default snapshot file, relative to the process working directory.
pub const DEFAULT_SNAPSHOT_FILE: &str = "users.json";

/// Default bcrypt work factor for password hashes.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Lowest work factor bcrypt accepts.
pub const MIN_HASH_COST: u32 = 4;

/// Highest work factor bcrypt accepts.
pub const MAX_HASH_COST: u32 = 31;

/// Length of an encoded bcrypt hash (`$2b$10$` + 22 salt chars + 31 hash chars).
pub const HASH_LENGTH: usize = 60;
