use thiserror::Error;

use crate::config::EnvironmentProvider;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Required environment variable not set: {name}")]
    MissingVar { name: &'static str },
}

/// Settings required before any subsystem can start
///
/// Read once at process startup through an `EnvironmentProvider`.
#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    database_url: String,
    jwt_secret: String,
    listen_addr: String,
}

impl BootstrapSettings {
    pub fn load(env: &dyn EnvironmentProvider) -> Result<Self, SettingsError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://cfp.db?mode=rwc".to_string());

        // No default: a guessable signing key must never reach production
        let jwt_secret = env
            .get_var("JWT_SECRET")
            .ok_or(SettingsError::MissingVar { name: "JWT_SECRET" })?;

        let listen_addr = env
            .get_var("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            listen_addr,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}
