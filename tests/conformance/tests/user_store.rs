//! Conformance tests for the document-backed user store.

use acct_model::{Claim, User};
use acct_storage::{AccountReader, AccountWriter, ClaimStore, UserCredentialStore};
use conformance::user_store;

#[tokio::test]
async fn created_user_round_trips_all_fields() {
    let store = user_store().await;
    let user = User::new("alice")
        .with_email("alice@example.com")
        .with_claim(Claim::new("dept", "eng"));
    store.create(&user).await.unwrap();

    let found = store.find_by_id(&user.id.to_string()).await.unwrap();
    assert_eq!(found, Some(user));
}

#[tokio::test]
async fn alice_gets_exactly_one_claim() {
    let store = user_store().await;
    let mut user = User::new("alice");
    store.create(&user).await.unwrap();

    store
        .add_claim(&mut user, Claim::new("dept", "eng"))
        .await
        .unwrap();

    let in_memory = store.claims(&user).await.unwrap();
    assert_eq!(in_memory, vec![Claim::new("dept", "eng")]);

    let fresh = store
        .find_by_id(&user.id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fresh.claims, vec![Claim::new("dept", "eng")]);
}

#[tokio::test]
async fn duplicate_username_rejected_across_different_ids() {
    let store = user_store().await;
    store.create(&User::new("alice")).await.unwrap();

    let err = store.create(&User::new("alice")).await.unwrap_err();
    assert!(err.is_duplicate());
    assert!(err.to_string().contains("alice"));
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_keeps_id_stable() {
    let store = user_store().await;
    let mut user = User::new("alice");
    store.create(&user).await.unwrap();

    user.email = Some("alice@example.com".to_string());
    user.email_confirmed = true;
    user.touch();
    store.update(&user).await.unwrap();

    let found = store
        .find_by_id(&user.id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email.as_deref(), Some("alice@example.com"));
    assert!(found.email_confirmed);
}

#[tokio::test]
async fn lookup_with_unparseable_id_returns_none() {
    let store = user_store().await;
    store.create(&User::new("alice")).await.unwrap();

    assert_eq!(store.find_by_id("").await.unwrap(), None);
    assert_eq!(store.find_by_id("42").await.unwrap(), None);
}

#[tokio::test]
async fn every_credential_operation_fails_loudly() {
    let store = user_store().await;
    let mut user = User::new("alice");

    assert!(
        store
            .add_login(&mut user, "google", "key")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .remove_login(&mut user, "google", "key")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .find_by_login("google", "key")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .add_to_role(&mut user, "ADMIN")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .remove_from_role(&mut user, "ADMIN")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .is_in_role(&user, "ADMIN")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .users_in_role("ADMIN")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .set_password_hash(&mut user, None)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(store.password_hash(&user).await.unwrap_err().is_not_supported());
    assert!(store.has_password(&user).await.unwrap_err().is_not_supported());
    assert!(
        store
            .set_security_stamp(&mut user, "stamp".to_string())
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(store.security_stamp(&user).await.unwrap_err().is_not_supported());
    assert!(store.lockout_end(&user).await.unwrap_err().is_not_supported());
    assert!(
        store
            .set_lockout_end(&mut user, None)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .increment_access_failed(&mut user)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .reset_access_failed(&mut user)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .set_email(&mut user, None)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .find_by_email("ALICE@EXAMPLE.COM")
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .set_email_confirmed(&mut user, true)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .set_phone_number(&mut user, None)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .set_phone_number_confirmed(&mut user, true)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .set_two_factor_enabled(&mut user, true)
            .await
            .unwrap_err()
            .is_not_supported()
    );
    assert!(
        store
            .two_factor_enabled(&user)
            .await
            .unwrap_err()
            .is_not_supported()
    );
}
