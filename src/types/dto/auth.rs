use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for speaker signup
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Email address for the new account
    pub email: String,

    /// Display name of the speaker
    pub name: String,

    /// Password for the new account
    pub password: String,
}

/// Response model for speaker signup
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    /// User ID (UUID) of the created account
    pub user_id: String,

    /// Email address of the created account
    pub email: String,
}

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address for authentication
    pub email: String,

    /// Password for authentication
    pub password: String,
}

/// Response model containing the access token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Number of seconds until the access token expires
    pub expires_in: i64,
}

/// Response model for the current-user endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    /// User ID (UUID)
    pub user_id: String,

    /// Email address of the account
    pub email: String,

    /// Display name
    pub name: String,

    /// Whether the account has organizer privileges
    pub is_organizer: bool,
}
