//! Disposal lifecycle conformance tests.

use std::sync::Arc;

use acct_model::{Claim, Role, User};
use acct_storage::{AccountReader, AccountWriter, ClaimStore};
use acct_storage_doc::{DocUserStore, MemoryCollection};
use conformance::{role_store, user_store};

#[tokio::test]
async fn disposed_role_store_rejects_reads_and_writes() {
    let store = role_store().await;
    let mut role = Role::new("Admin");
    store.create(&role).await.unwrap();

    store.dispose();
    assert!(store.is_disposed());

    assert!(store.create(&role).await.unwrap_err().is_disposed());
    assert!(store.update(&role).await.unwrap_err().is_disposed());
    assert!(store.delete(&role).await.unwrap_err().is_disposed());
    assert!(
        store
            .find_by_id(&role.id.to_string())
            .await
            .unwrap_err()
            .is_disposed()
    );
    assert!(
        store
            .find_by_normalized_name("ADMIN")
            .await
            .unwrap_err()
            .is_disposed()
    );
    assert!(store.list_all().await.unwrap_err().is_disposed());
    assert!(store.claims(&role).await.unwrap_err().is_disposed());
    assert!(
        store
            .add_claim(&mut role, Claim::new("scope", "users:read"))
            .await
            .unwrap_err()
            .is_disposed()
    );
    assert!(
        store
            .remove_claim(&mut role, &Claim::new("scope", "users:read"))
            .await
            .unwrap_err()
            .is_disposed()
    );
}

#[tokio::test]
async fn disposed_user_store_rejects_reads_and_writes() {
    let store = user_store().await;
    let user = User::new("alice");
    store.create(&user).await.unwrap();

    store.dispose();

    assert!(store.create(&user).await.unwrap_err().is_disposed());
    assert!(
        store
            .find_by_id(&user.id.to_string())
            .await
            .unwrap_err()
            .is_disposed()
    );
    assert!(store.claims(&user).await.unwrap_err().is_disposed());
}

#[tokio::test]
async fn dispose_is_idempotent() {
    let store = role_store().await;

    store.dispose();
    store.dispose();
    assert!(store.is_disposed());
}

#[tokio::test]
async fn disposal_does_not_close_the_shared_collection() {
    let collection = Arc::new(MemoryCollection::<User>::new());

    let first = DocUserStore::new(Arc::clone(&collection));
    first.create(&User::new("alice")).await.unwrap();
    first.dispose();

    let second = DocUserStore::new(collection);
    let found = second.find_by_normalized_name("ALICE").await.unwrap();
    assert!(found.is_some());
}
