use thiserror::Error;

use crate::domain::UserId;

/// Failures raised by user lookup at the repository boundary
///
/// Every `UserRepository` implementation reports through this type so callers
/// can match on it without knowing which backend produced it.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: UserId },

    #[error("Storage error: {operation} failed")]
    Storage {
        operation: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}
