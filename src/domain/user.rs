use std::fmt;

use uuid::Uuid;

use crate::types::db;

/// Stable identifier for a speaker/organizer account
///
/// Passed by value between the session layer and the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A speaker or organizer account
///
/// Owned by the persistence layer. Consumers hold it behind `Arc` and never
/// mutate it; per-request code re-resolves it instead of caching.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub is_organizer: bool,
    pub created_at: i64,
}

impl From<db::user::Model> for User {
    fn from(row: db::user::Model) -> Self {
        Self {
            id: UserId(row.id),
            email: row.email,
            name: row.name,
            bio: row.bio,
            is_organizer: row.is_organizer,
            created_at: row.created_at,
        }
    }
}
