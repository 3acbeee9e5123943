// Test utilities shared across integration tests

use std::sync::Arc;

use migration::{CfpMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use cfp_backend::domain::UserId;
use cfp_backend::providers::CryptoProvider;
use cfp_backend::stores::{NewUser, UserStore};

/// Creates an in-memory database with migrations applied and a store over it
pub async fn setup_test_store() -> (DatabaseConnection, Arc<UserStore>) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    CfpMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let user_store = Arc::new(UserStore::new(db.clone()));

    (db, user_store)
}

/// Insert a speaker account and return its id
pub async fn seed_speaker(store: &UserStore, email: &str, name: &str, password: &str) -> UserId {
    let password_hash = CryptoProvider::new()
        .hash_password(password)
        .expect("Failed to hash password");

    store
        .add_user(NewUser {
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
        })
        .await
        .expect("Failed to seed speaker")
}
