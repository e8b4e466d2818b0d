//! Search tests
//!
//! `search` filters the snapshot on disk, not the in-memory cache.

use userstore::{SearchQuery, UserStore};

use super::helpers::*;
use crate::helpers::*;

#[tokio::test]
async fn test_search_by_name_scenario() {
    let mut ctx = setup_store().await;
    let alice = create_alice(&mut ctx.store).await;

    let results = ctx.store.search(&SearchQuery::new().with_name("ali")).await;
    assert_eq!(results, vec![alice]);

    let results = ctx
        .store
        .search(&SearchQuery::new().with_email("nomatch"))
        .await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let mut ctx = setup_store().await;
    create_user(&mut ctx.store, "Alice", "Alice@Example.com", "pw").await;

    assert_eq!(
        ctx.store.search(&SearchQuery::new().with_name("aLiCe")).await.len(),
        1
    );
    assert_eq!(
        ctx.store
            .search(&SearchQuery::new().with_email("EXAMPLE"))
            .await
            .len(),
        1
    );
}

#[tokio::test]
async fn test_search_combines_filters() {
    let mut ctx = setup_store().await;
    create_user(&mut ctx.store, "alice", "alice@work.com", "pw").await;
    create_user(&mut ctx.store, "alice", "alice@home.com", "pw").await;
    create_user(&mut ctx.store, "bob", "bob@work.com", "pw").await;

    let query = SearchQuery::new().with_name("alice").with_email("work");
    let results = ctx.store.search(&query).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].email, "alice@work.com");
}

#[tokio::test]
async fn test_empty_query_returns_everything() {
    let mut ctx = setup_store().await;
    create_users(&mut ctx.store, 4).await;

    assert_eq!(ctx.store.search(&SearchQuery::new()).await.len(), 4);
    assert_eq!(
        ctx.store
            .search(&SearchQuery::new().with_name("").with_email(""))
            .await
            .len(),
        4
    );
}

#[tokio::test]
async fn test_search_sees_external_edits_but_cache_does_not() {
    let mut ctx = setup_store().await;
    create_alice(&mut ctx.store).await;

    // Another store on the same file adds a user behind our back
    let mut other = reopen(&ctx).await;
    create_user(&mut other, "alfred", "alfred@x.com", "pw").await;

    let results = ctx.store.search(&SearchQuery::new().with_name("al")).await;
    assert_eq!(results.len(), 2);
    assert_eq!(ctx.store.find_all().await.len(), 1);
    assert!(ctx.store.find_by_email("alfred@x.com").await.is_none());

    ctx.store.reload().await;
    assert_eq!(ctx.store.find_all().await.len(), 2);
}

#[tokio::test]
async fn test_search_without_snapshot_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = UserStore::open(test_config(&dir)).await.unwrap();

    assert!(store.search(&SearchQuery::new()).await.is_empty());
}
