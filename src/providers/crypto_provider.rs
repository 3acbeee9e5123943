use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// Argon2id password hashing and verification
pub struct CryptoProvider;

impl CryptoProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn hash_password(&self, password: &str) -> Result<String, CryptoError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CryptoError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash
    ///
    /// An unparseable stored hash reads as a failed verification rather than
    /// an error the caller could distinguish from a wrong password.
    pub fn verify_password(&self, password_hash: &str, password: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
            tracing::error!("Stored password hash is not parseable");
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for CryptoProvider {
    fn default() -> Self {
        Self::new()
    }
}
