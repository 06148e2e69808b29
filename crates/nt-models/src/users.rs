//! The identity record.
//!
//! Rows live in `_user`. The database enforces email uniqueness and fills in
//! both timestamps; the application mints the time-ordered `id`.

use crate::ids::UserId;
use crate::value_types::Email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Column width of `_user.name`.
pub const NAME_MAX_LEN: u64 = 255;

/// A stored user account.
///
/// `updated_at` is not maintained by a trigger. It only moves when a caller
/// asks for it explicitly.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a user.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub email: Email,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: Email) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }
}

/// Field-level update. Absent fields keep their stored value.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    pub email: Option<Email>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
