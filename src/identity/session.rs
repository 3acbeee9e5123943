use std::sync::Arc;

use uuid::Uuid;

use crate::domain::UserId;
use crate::identity::SessionPrincipal;
use crate::providers::TokenProvider;

/// Capability contract over the authentication session store
///
/// Returns `None` (not an error) when no one is logged in. Session state is
/// request-local; implementations re-resolve it on every call.
pub trait AuthenticationSession: Send + Sync {
    fn current_principal(&self) -> Option<SessionPrincipal>;
}

/// Bearer-token session backend
///
/// Built fresh for each inbound request from its optional bearer token.
/// Anything short of a valid, unexpired JWT with a UUID subject reads as
/// "no active session".
pub struct BearerSession {
    token: Option<String>,
    token_provider: Arc<TokenProvider>,
}

impl BearerSession {
    pub fn new(token: Option<String>, token_provider: Arc<TokenProvider>) -> Self {
        Self {
            token,
            token_provider,
        }
    }
}

impl AuthenticationSession for BearerSession {
    fn current_principal(&self) -> Option<SessionPrincipal> {
        let token = self.token.as_deref()?;

        let claims = match self.token_provider.validate_jwt(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("Bearer token rejected: {}", e);
                return None;
            }
        };

        match Uuid::parse_str(&claims.sub) {
            Ok(id) => Some(SessionPrincipal::new(UserId(id))),
            Err(_) => {
                tracing::warn!("JWT subject is not a user id: {}", claims.sub);
                None
            }
        }
    }
}
