//! User system for userstore
//!
//! Provides user records with bcrypt-hashed passwords, a store that keeps
//! them in memory and mirrors every change to a JSON snapshot, and
//! email/password authentication against that store.

pub mod crypto;
pub mod errors;
pub mod id;
pub mod persistence;
pub mod store;
pub mod types;

pub use errors::UserError;
pub use persistence::{PersistenceError, Users, load_snapshot, save_snapshot};
pub use store::UserStore;
pub use types::*;
