//! User store integration tests

mod helpers;
mod search_tests;
