#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::{User, UserId};
    use crate::errors::{IdentityError, LookupError};
    use crate::identity::{
        AuthenticationSession, IdentityProvider, SessionIdentityProvider, SessionPrincipal,
        UserRepository,
    };

    /// Session stub that always reports the same principal state
    struct StaticSession(Option<SessionPrincipal>);

    impl AuthenticationSession for StaticSession {
        fn current_principal(&self) -> Option<SessionPrincipal> {
            self.0.clone()
        }
    }

    /// Session stub that pops a scripted sequence of principal states
    struct SequenceSession(Mutex<Vec<Option<SessionPrincipal>>>);

    impl AuthenticationSession for SequenceSession {
        fn current_principal(&self) -> Option<SessionPrincipal> {
            self.0.lock().unwrap().remove(0)
        }
    }

    /// Repository spy recording every identifier it is asked for
    ///
    /// Yields the configured entity, or UserNotFound when none is configured.
    struct RecordingRepository {
        calls: Mutex<Vec<UserId>>,
        user: Option<Arc<User>>,
    }

    impl RecordingRepository {
        fn returning(user: Arc<User>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                user: Some(user),
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                user: None,
            }
        }

        fn calls(&self) -> Vec<UserId> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn find_by_id(&self, id: UserId) -> Result<Arc<User>, LookupError> {
            self.calls.lock().unwrap().push(id);
            match &self.user {
                Some(user) => Ok(Arc::clone(user)),
                None => Err(LookupError::UserNotFound { user_id: id }),
            }
        }
    }

    fn test_user(id: UserId) -> Arc<User> {
        Arc::new(User {
            id,
            email: "speaker@example.com".to_string(),
            name: "Test Speaker".to_string(),
            bio: None,
            is_organizer: false,
            created_at: 0,
        })
    }

    #[tokio::test]
    async fn test_no_session_fails_not_authenticated_without_touching_repository() {
        let session = Arc::new(StaticSession(None));
        let users = Arc::new(RecordingRepository::failing());
        let provider = SessionIdentityProvider::new(session, users.clone());

        let result = provider.current_user().await;

        assert!(matches!(result, Err(IdentityError::NotAuthenticated)));
        assert_eq!(users.calls().len(), 0);
    }

    #[tokio::test]
    async fn test_authenticated_session_returns_exactly_the_repository_entity() {
        let user_id = UserId(Uuid::new_v4());
        let user = test_user(user_id);

        let session = Arc::new(StaticSession(Some(SessionPrincipal::new(user_id))));
        let users = Arc::new(RecordingRepository::returning(Arc::clone(&user)));
        let provider = SessionIdentityProvider::new(session, users);

        let resolved = provider.current_user().await.unwrap();

        // Same allocation, not an equivalent copy
        assert!(Arc::ptr_eq(&resolved, &user));
    }

    #[tokio::test]
    async fn test_identifier_is_passed_unchanged_and_repository_called_once() {
        let user_id = UserId(Uuid::new_v4());

        let session = Arc::new(StaticSession(Some(SessionPrincipal::new(user_id))));
        let users = Arc::new(RecordingRepository::returning(test_user(user_id)));
        let provider = SessionIdentityProvider::new(session, users.clone());

        provider.current_user().await.unwrap();

        assert_eq!(users.calls(), vec![user_id]);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates_unaltered() {
        let user_id = UserId(Uuid::new_v4());

        let session = Arc::new(StaticSession(Some(SessionPrincipal::new(user_id))));
        let users = Arc::new(RecordingRepository::failing());
        let provider = SessionIdentityProvider::new(session, users.clone());

        let result = provider.current_user().await;

        match result {
            Err(IdentityError::Lookup(LookupError::UserNotFound { user_id: failed_id })) => {
                assert_eq!(failed_id, user_id);
            }
            other => panic!("Expected UserNotFound to pass through, got {:?}", other),
        }
        assert_eq!(users.calls(), vec![user_id]);
    }

    #[tokio::test]
    async fn test_session_is_re_resolved_on_every_call() {
        let user_id = UserId(Uuid::new_v4());
        let session = Arc::new(SequenceSession(Mutex::new(vec![
            Some(SessionPrincipal::new(user_id)),
            None,
        ])));
        let users = Arc::new(RecordingRepository::returning(test_user(user_id)));
        let provider = SessionIdentityProvider::new(session, users.clone());

        // Logged in for the first call, logged out before the second
        assert!(provider.current_user().await.is_ok());
        assert!(matches!(
            provider.current_user().await,
            Err(IdentityError::NotAuthenticated)
        ));

        // The logged-out call must not have reached the repository
        assert_eq!(users.calls().len(), 1);
    }
}
