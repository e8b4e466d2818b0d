//! Shared setup for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use userstore::{StoreConfig, UserStore, constants::MIN_HASH_COST};

/// A store living in its own temporary directory.
///
/// The directory is removed when the context is dropped, so keep it alive for
/// as long as the store is used.
pub struct TestContext {
    pub dir: TempDir,
    pub store: UserStore,
}

impl TestContext {
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.path().join("users.json")
    }
}

/// Config for a snapshot inside `dir`, with the cheapest hash cost.
pub fn test_config(dir: &TempDir) -> StoreConfig {
    StoreConfig::new(dir.path().join("users.json")).with_hash_cost(MIN_HASH_COST)
}

/// Open an empty store in a fresh temporary directory.
pub async fn setup_store() -> TestContext {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = UserStore::open(test_config(&dir))
        .await
        .expect("Failed to open store");
    TestContext { dir, store }
}

/// Open a second store on the same snapshot as `ctx`.
pub async fn reopen(ctx: &TestContext) -> UserStore {
    UserStore::open(test_config(&ctx.dir))
        .await
        .expect("Failed to reopen store")
}
