//! Session lookup against the `_session` table.

use async_trait::async_trait;
use axum::http::HeaderMap;
use nt_models::{Session, SessionRecord, User};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::cookies::session_token;
use crate::error::ProviderError;
use crate::provider::SessionProvider;

/// Resolves the session cookie against Postgres.
///
/// Read-only: expired rows are ignored, not deleted, and nothing is
/// refreshed on access.
#[derive(Clone, Debug)]
pub struct DbSessionProvider {
    db: PgPool,
    cookie_name: String,
}

impl DbSessionProvider {
    pub fn new(db: PgPool, cookie_name: impl Into<String>) -> Self {
        Self {
            db,
            cookie_name: cookie_name.into(),
        }
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<Session>, ProviderError> {
        let record = sqlx::query_as::<_, SessionRecord>(
            r#"SELECT id, token, user_id, expires_at, ip_address, user_agent, created_at, updated_at
               FROM _session
               WHERE token = $1"#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;

        let Some(record) = record else {
            debug!("Session token not found");
            return Ok(None);
        };

        if record.is_expired() {
            debug!(session_id = %record.id, "Session expired");
            return Ok(None);
        }

        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, created_at, updated_at
               FROM _user
               WHERE id = $1"#,
        )
        .bind(record.user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user.map(|user| Session {
            session: record,
            user,
        }))
    }
}

#[async_trait]
impl SessionProvider for DbSessionProvider {
    #[instrument(skip(self, headers))]
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, ProviderError> {
        match session_token(headers, &self.cookie_name) {
            Some(token) => self.find_by_token(&token).await,
            None => Ok(None),
        }
    }
}
