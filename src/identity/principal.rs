use crate::domain::UserId;

/// The externally-authenticated actor behind the current session
///
/// Created only by `AuthenticationSession` implementations; everything else
/// treats it as read-only and extracts the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPrincipal {
    user_id: UserId,
}

impl SessionPrincipal {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
