use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::{User, UserId};
use crate::errors::{LookupError, SignupError};
use crate::identity::UserRepository;
use crate::types::db::user;

/// sea-orm backed store for speaker/organizer accounts
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch the credential projection for a login attempt
    ///
    /// Returns `Ok(None)` for an unknown email so the caller can collapse
    /// "no such account" and "wrong password" into one response.
    pub async fn find_by_email_for_auth(
        &self,
        email: &str,
    ) -> Result<Option<UserForAuth>, LookupError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .select_only()
            .column(user::Column::Id)
            .column(user::Column::Email)
            .column(user::Column::PasswordHash)
            .into_model::<UserForAuth>()
            .one(&self.db)
            .await
            .map_err(|source| LookupError::Storage {
                operation: "find_user_by_email_for_auth",
                source,
            })
    }

    /// Insert a new speaker account
    pub async fn add_user(&self, new_user: NewUser) -> Result<UserId, SignupError> {
        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(&new_user.email))
            .one(&self.db)
            .await
            .map_err(|source| SignupError::Storage {
                operation: "check_email_in_use",
                source,
            })?;

        if existing.is_some() {
            return Err(SignupError::DuplicateEmail {
                email: new_user.email,
            });
        }

        let user_id = UserId::new();
        let now = Utc::now().timestamp();
        let email = new_user.email.clone();

        let row = user::ActiveModel {
            id: Set(user_id.as_uuid()),
            email: Set(new_user.email),
            name: Set(new_user.name),
            bio: Set(None),
            password_hash: Set(new_user.password_hash),
            is_organizer: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        row.insert(&self.db).await.map_err(|source| {
            // Concurrent signup can slip past the pre-check
            if source.to_string().contains("UNIQUE") {
                SignupError::DuplicateEmail { email }
            } else {
                SignupError::Storage {
                    operation: "insert_user",
                    source,
                }
            }
        })?;

        Ok(user_id)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Arc<User>, LookupError> {
        let row = user::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(|source| LookupError::Storage {
                operation: "find_user_by_id",
                source,
            })?;

        match row {
            Some(model) => Ok(Arc::new(User::from(model))),
            None => Err(LookupError::UserNotFound { user_id: id }),
        }
    }
}

/// Credential projection of a user row, loaded for password verification only
#[derive(FromQueryResult)]
pub struct UserForAuth {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Fields required to create a speaker account
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}
