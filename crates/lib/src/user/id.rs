//! User identifier generation.
//!
//! Identifiers are random UUID v4 strings. A collision is astronomically
//! unlikely, but a candidate is still checked against the existing keys and
//! redrawn until it is free.

use uuid::Uuid;

/// Draw a fresh random identifier in hyphenated UUID layout.
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}

/// Draw candidates from `next` until one is not `taken`.
pub fn unique_id<T, N>(taken: T, mut next: N) -> String
where
    T: Fn(&str) -> bool,
    N: FnMut() -> String,
{
    let mut id = next();
    while taken(&id) {
        tracing::debug!(id = %id, "Generated identifier already in use, retrying");
        id = next();
    }
    id
}
