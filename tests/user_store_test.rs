mod common;

use uuid::Uuid;

use cfp_backend::domain::UserId;
use cfp_backend::errors::{LookupError, SignupError};
use cfp_backend::identity::UserRepository;
use cfp_backend::providers::CryptoProvider;
use cfp_backend::stores::NewUser;

use common::{seed_speaker, setup_test_store};

#[tokio::test]
async fn test_add_user_then_find_by_id_round_trips() {
    let (_db, store) = setup_test_store().await;
    let user_id = seed_speaker(&store, "grace@example.com", "Grace", "a long enough password").await;

    let user = store
        .find_by_id(user_id)
        .await
        .expect("Lookup should succeed");

    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(user.name, "Grace");
    assert_eq!(user.bio, None);
    assert!(!user.is_organizer);
    assert!(user.created_at > 0);
}

#[tokio::test]
async fn test_find_by_id_unknown_reports_user_not_found() {
    let (_db, store) = setup_test_store().await;

    let ghost_id = UserId(Uuid::new_v4());
    let result = store.find_by_id(ghost_id).await;

    match result {
        Err(LookupError::UserNotFound { user_id }) => assert_eq!(user_id, ghost_id),
        other => panic!("Expected UserNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_user_rejects_duplicate_email() {
    let (_db, store) = setup_test_store().await;
    seed_speaker(&store, "grace@example.com", "Grace", "a long enough password").await;

    let password_hash = CryptoProvider::new()
        .hash_password("another password")
        .expect("Failed to hash password");

    let result = store
        .add_user(NewUser {
            email: "grace@example.com".to_string(),
            name: "Other Grace".to_string(),
            password_hash,
        })
        .await;

    match result {
        Err(SignupError::DuplicateEmail { email }) => assert_eq!(email, "grace@example.com"),
        other => panic!("Expected DuplicateEmail, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_find_by_email_for_auth_returns_credential_projection() {
    let (_db, store) = setup_test_store().await;
    let user_id = seed_speaker(&store, "grace@example.com", "Grace", "a long enough password").await;

    let account = store
        .find_by_email_for_auth("grace@example.com")
        .await
        .expect("Lookup should succeed")
        .expect("Account should exist");

    assert_eq!(account.id, user_id.as_uuid());
    assert_eq!(account.email, "grace@example.com");
    assert!(CryptoProvider::new().verify_password(&account.password_hash, "a long enough password"));
}

#[tokio::test]
async fn test_find_by_email_for_auth_unknown_email_is_none() {
    let (_db, store) = setup_test_store().await;

    let account = store
        .find_by_email_for_auth("nobody@example.com")
        .await
        .expect("Lookup should succeed");

    assert!(account.is_none());
}
