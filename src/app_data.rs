use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::BootstrapSettings;
use crate::providers::{CryptoProvider, TokenProvider};
use crate::stores::UserStore;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across endpoints.
pub struct AppData {
    pub db: DatabaseConnection,
    pub token_provider: Arc<TokenProvider>,
    pub crypto_provider: Arc<CryptoProvider>,
    pub user_store: Arc<UserStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be established and migrated before
    /// calling this.
    pub fn init(db: DatabaseConnection, settings: &BootstrapSettings) -> Self {
        tracing::debug!("Initializing AppData...");

        let token_provider = Arc::new(TokenProvider::new(settings.jwt_secret().to_string()));
        let crypto_provider = Arc::new(CryptoProvider::new());
        let user_store = Arc::new(UserStore::new(db.clone()));

        tracing::debug!("AppData initialization complete");

        Self {
            db,
            token_provider,
            crypto_provider,
            user_store,
        }
    }
}
