use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

use crate::errors::{IdentityError, LookupError, SignupError};

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// No authenticated session, or the session no longer maps to an account
    #[oai(status = 401)]
    NotAuthenticated(Json<AuthErrorResponse>),

    /// Email already registered
    #[oai(status = 400)]
    DuplicateEmail(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(AuthErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    pub fn not_authenticated() -> Self {
        AuthError::NotAuthenticated(Json(AuthErrorResponse {
            error: "not_authenticated".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    pub fn duplicate_email() -> Self {
        AuthError::DuplicateEmail(Json(AuthErrorResponse {
            error: "duplicate_email".to_string(),
            message: "Email already registered".to_string(),
            status_code: 400,
        }))
    }

    pub fn internal_error(message: String) -> Self {
        AuthError::InternalError(Json(AuthErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::NotAuthenticated(json) => json.0.message.clone(),
            AuthError::DuplicateEmail(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<IdentityError> for AuthError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotAuthenticated => AuthError::not_authenticated(),
            // A token for a deleted account is treated as unauthenticated,
            // not as a 404 that would leak account existence.
            IdentityError::Lookup(LookupError::UserNotFound { user_id }) => {
                tracing::debug!("Session principal {} has no user row", user_id);
                AuthError::not_authenticated()
            }
            IdentityError::Lookup(LookupError::Storage { operation, source }) => {
                tracing::error!("User lookup failed during {}: {}", operation, source);
                AuthError::internal_error("User lookup failed".to_string())
            }
        }
    }
}

impl From<SignupError> for AuthError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::DuplicateEmail { .. } => AuthError::duplicate_email(),
            SignupError::Storage { operation, source } => {
                tracing::error!("Signup failed during {}: {}", operation, source);
                AuthError::internal_error("Account creation failed".to_string())
            }
        }
    }
}
