use std::sync::Arc;

use poem_openapi::{OpenApi, SecurityScheme, Tags, auth::Bearer, payload::Json};

use crate::app_data::AppData;
use crate::domain::UserId;
use crate::errors::AuthError;
use crate::identity::{BearerSession, IdentityProvider, SessionIdentityProvider, UserRepository};
use crate::stores::NewUser;
use crate::types::dto::auth::{
    CurrentUserResponse, LoginRequest, SignupRequest, SignupResponse, TokenResponse,
};

/// Authentication API endpoints
pub struct AuthApi {
    app_data: Arc<AppData>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }

    /// Build the request-scoped identity provider for one bearer token
    ///
    /// A fresh session adapter per request keeps resolution tied to the
    /// latest authentication state; nothing is cached across requests.
    fn identity_provider(&self, token: String) -> SessionIdentityProvider {
        let session = Arc::new(BearerSession::new(
            Some(token),
            self.app_data.token_provider.clone(),
        ));
        let users: Arc<dyn UserRepository> = self.app_data.user_store.clone();

        SessionIdentityProvider::new(session, users)
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Create a new speaker account
    #[oai(path = "/signup", method = "post", tag = "AuthTags::Authentication")]
    async fn signup(&self, body: Json<SignupRequest>) -> Result<Json<SignupResponse>, AuthError> {
        let password_hash = self
            .app_data
            .crypto_provider
            .hash_password(&body.password)
            .map_err(|e| AuthError::internal_error(format!("Password hashing error: {}", e)))?;

        let user_id = self
            .app_data
            .user_store
            .add_user(NewUser {
                email: body.email.clone(),
                name: body.name.clone(),
                password_hash,
            })
            .await?;

        tracing::info!("Created speaker account {}", user_id);

        Ok(Json(SignupResponse {
            user_id: user_id.to_string(),
            email: body.email.clone(),
        }))
    }

    /// Login with email and password to receive an access token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let account = self
            .app_data
            .user_store
            .find_by_email_for_auth(&body.email)
            .await
            .map_err(|e| {
                tracing::error!("Credential lookup failed: {}", e);
                AuthError::internal_error("Login failed".to_string())
            })?;

        // Unknown email and wrong password are indistinguishable to the caller
        let Some(account) = account else {
            return Err(AuthError::invalid_credentials());
        };

        if !self
            .app_data
            .crypto_provider
            .verify_password(&account.password_hash, &body.password)
        {
            return Err(AuthError::invalid_credentials());
        }

        let access_token = self
            .app_data
            .token_provider
            .generate_jwt(UserId(account.id))
            .map_err(|e| AuthError::internal_error(format!("Failed to generate token: {}", e)))?;

        Ok(Json(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.app_data.token_provider.expires_in_seconds(),
        }))
    }

    /// Return the account behind the current session
    #[oai(path = "/me", method = "get", tag = "AuthTags::Authentication")]
    async fn me(&self, auth: BearerAuth) -> Result<Json<CurrentUserResponse>, AuthError> {
        let provider = self.identity_provider(auth.0.token.clone());

        let user = provider.current_user().await?;

        Ok(Json(CurrentUserResponse {
            user_id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            is_organizer: user.is_organizer,
        }))
    }
}
