use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::User;
use crate::errors::IdentityError;
use crate::identity::{AuthenticationSession, UserRepository};

/// Capability the rest of the application depends on to gate
/// authenticated-only paths
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<Arc<User>, IdentityError>;
}

/// Resolves the current user by bridging the session store to the user
/// repository
///
/// Stateless translation layer: each call re-queries the session, and the
/// repository is consulted only when a principal exists. The entity the
/// repository yields is returned untouched.
pub struct SessionIdentityProvider {
    session: Arc<dyn AuthenticationSession>,
    users: Arc<dyn UserRepository>,
}

impl SessionIdentityProvider {
    pub fn new(session: Arc<dyn AuthenticationSession>, users: Arc<dyn UserRepository>) -> Self {
        Self { session, users }
    }
}

#[async_trait]
impl IdentityProvider for SessionIdentityProvider {
    async fn current_user(&self) -> Result<Arc<User>, IdentityError> {
        let principal = self
            .session
            .current_principal()
            .ok_or(IdentityError::NotAuthenticated)?;

        let user = self.users.find_by_id(principal.user_id()).await?;

        Ok(user)
    }
}
