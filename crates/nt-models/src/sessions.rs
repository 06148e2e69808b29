//! Sessions as the provider sees them.
//!
//! A [`SessionRecord`] is one row of `_session`. A resolved [`Session`] pairs
//! that row with the user it belongs to.

use crate::ids::{SessionId, UserId};
use crate::users::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: SessionId,
    /// Opaque cookie value. Never echoed back in responses.
    #[serde(skip_serializing, default)]
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    /// A session is dead at and after `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// A validated session together with its owner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session: SessionRecord,
    pub user: User,
}

impl Session {
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}
