//! User entity model and DTOs.

use relief_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserProfile`] or [`UserSummary`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The signed-in user's own account details.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub created_at: Timestamp,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            created_at: user.created_at,
        }
    }
}

/// Public identity of the user that owns a listed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Owner columns selected alongside a joined record.
///
/// Queries alias the `users` columns as `owner_*` so they do not collide with
/// the record's own `id` and timestamps.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct OwnerColumns {
    pub owner_username: String,
    pub owner_email: String,
    pub owner_first_name: String,
    pub owner_last_name: String,
}

/// `SELECT` fragment producing [`OwnerColumns`] from a `users u` join.
pub(crate) const OWNER_SELECT: &str = "u.username AS owner_username, u.email AS owner_email, \
                                       u.first_name AS owner_first_name, u.last_name AS owner_last_name";

impl OwnerColumns {
    pub(crate) fn into_summary(self, id: DbId) -> UserSummary {
        UserSummary {
            id,
            username: self.owner_username,
            email: self.owner_email,
            first_name: self.owner_first_name,
            last_name: self.owner_last_name,
        }
    }
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}
