//! Conformance tests for the document-backed role store.

use acct_model::{Claim, Role, normalize_name};
use acct_storage::{AccountReader, AccountWriter, ClaimStore};
use conformance::role_store;

#[tokio::test]
async fn created_role_round_trips_all_fields() {
    let store = role_store().await;
    let role = Role::new("Auditor").with_claim(Claim::new("scope", "reports:read"));
    store.create(&role).await.unwrap();

    let found = store.find_by_id(&role.id.to_string()).await.unwrap();
    assert_eq!(found, Some(role));
}

#[tokio::test]
async fn duplicate_name_fails_and_writes_nothing() {
    let store = role_store().await;
    store.create(&Role::new("Admin")).await.unwrap();

    let err = store.create(&Role::new("Admin")).await.unwrap_err();
    assert!(err.is_duplicate());
    assert!(err.to_string().contains("Admin"));

    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn normalized_name_lookup_matches_stored_form() {
    let store = role_store().await;
    let role = Role::new("Admin");
    assert_eq!(role.normalized_name, "ADMIN");
    store.create(&role).await.unwrap();

    let found = store.find_by_normalized_name("ADMIN").await.unwrap();
    assert_eq!(found, Some(role));
}

#[tokio::test]
async fn unique_index_catches_what_the_precheck_misses() {
    // "Admin" and "admin" differ as display names, so the pre-write
    // duplicate query passes; the normalized-name index still rejects
    // the second insert.
    let store = role_store().await;
    store.create(&Role::new("Admin")).await.unwrap();

    let mut lower = Role::new("admin");
    lower.normalized_name = normalize_name(&lower.name);
    let err = store.create(&lower).await.unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_replaces_whole_document() {
    let store = role_store().await;
    let mut role = Role::new("Admin");
    store.create(&role).await.unwrap();

    role.name = "Administrator".to_string();
    role.normalized_name = normalize_name(&role.name);
    role.touch();
    store.update(&role).await.unwrap();

    let found = store.find_by_id(&role.id.to_string()).await.unwrap().unwrap();
    assert_eq!(found.name, "Administrator");
    assert_eq!(found.normalized_name, "ADMINISTRATOR");
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_of_nonexistent_id_succeeds() {
    let store = role_store().await;

    store.delete(&Role::new("Ghost")).await.unwrap();
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_only_the_matching_role() {
    let store = role_store().await;
    let admin = Role::new("Admin");
    let auditor = Role::new("Auditor");
    store.create(&admin).await.unwrap();
    store.create(&auditor).await.unwrap();

    store.delete(&admin).await.unwrap();

    let remaining = store.list_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, auditor.id);
}

#[tokio::test]
async fn claim_add_remove_round_trip() {
    let store = role_store().await;
    let mut role = Role::new("Admin");
    store.create(&role).await.unwrap();

    let claim = Claim::new("scope", "users:write");
    store.add_claim(&mut role, claim.clone()).await.unwrap();
    store.add_claim(&mut role, claim.clone()).await.unwrap();
    assert_eq!(store.claims(&role).await.unwrap().len(), 1);

    store.remove_claim(&mut role, &claim).await.unwrap();
    assert!(store.claims(&role).await.unwrap().is_empty());

    let fresh = store.find_by_id(&role.id.to_string()).await.unwrap().unwrap();
    assert!(fresh.claims.is_empty());
}

#[tokio::test]
async fn list_all_materializes_every_role() {
    let store = role_store().await;
    for name in ["Admin", "Auditor", "Operator"] {
        store.create(&Role::new(name)).await.unwrap();
    }

    let mut names: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|role| role.name)
        .collect();
    names.sort();

    assert_eq!(names, ["Admin", "Auditor", "Operator"]);
}
