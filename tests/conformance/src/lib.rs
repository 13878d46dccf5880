//! Shared fixtures for the account-store conformance suite.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

use std::sync::Arc;

use acct_model::{Role, User};
use acct_storage_doc::{DocRoleStore, DocUserStore, MemoryCollection};

/// A role store over a fresh in-memory collection, indexes ensured.
///
/// # Panics
///
/// Panics if index creation fails on the empty collection.
pub async fn role_store() -> DocRoleStore<MemoryCollection<Role>> {
    let store = DocRoleStore::new(Arc::new(MemoryCollection::new()));
    store.ensure_indexes().await.expect("index on empty collection");
    store
}

/// A user store over a fresh in-memory collection, indexes ensured.
///
/// # Panics
///
/// Panics if index creation fails on the empty collection.
pub async fn user_store() -> DocUserStore<MemoryCollection<User>> {
    let store = DocUserStore::new(Arc::new(MemoryCollection::new()));
    store.ensure_indexes().await.expect("index on empty collection");
    store
}
