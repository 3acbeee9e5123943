use std::fmt;

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use thiserror::Error;

use crate::domain::UserId;
use crate::types::internal::auth::Claims;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid or malformed token")]
    Invalid,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Manages access token generation and validation
pub struct TokenProvider {
    jwt_secret: String,
    jwt_expiration_minutes: i64,
}

impl TokenProvider {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_minutes: 15,
        }
    }

    /// Generate a signed access token for the given user
    pub fn generate_jwt(&self, user_id: UserId) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let expiration = now + (self.jwt_expiration_minutes * 60);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate an access token and return its claims
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        Ok(token_data.claims)
    }

    /// Access token lifetime in seconds, for token responses
    pub fn expires_in_seconds(&self) -> i64 {
        self.jwt_expiration_minutes * 60
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}
