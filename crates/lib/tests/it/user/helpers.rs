//! Helper functions for user store testing

#![allow(dead_code)]

use userstore::{NewUser, UserRecord, UserStore};

/// Create a user and return the stored record
pub async fn create_user(
    store: &mut UserStore,
    username: &str,
    email: &str,
    password: &str,
) -> UserRecord {
    store
        .create(NewUser::new(username, email, password))
        .await
        .expect("Failed to create user")
}

/// Create the standard "alice" fixture
pub async fn create_alice(store: &mut UserStore) -> UserRecord {
    create_user(store, "alice", "a@x.com", "secret1").await
}

/// Create several users named `user0..userN` with emails `user{i}@example.com`
pub async fn create_users(store: &mut UserStore, count: usize) -> Vec<UserRecord> {
    let mut users = Vec::with_capacity(count);
    for i in 0..count {
        let user = create_user(
            store,
            &format!("user{i}"),
            &format!("user{i}@example.com"),
            &format!("password{i}"),
        )
        .await;
        users.push(user);
    }
    users
}
