use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{User, UserId};
use crate::errors::LookupError;

/// Lookup capability for domain user entities
///
/// Implementations must report a missing identifier as
/// `LookupError::UserNotFound` rather than an untyped failure.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Arc<User>, LookupError>;
}
