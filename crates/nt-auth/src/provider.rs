//! The session capability consumed by the gate and the auth endpoints.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::HeaderMap;
use nt_models::Session;

use crate::cookies::session_token;
use crate::error::ProviderError;

/// Resolves the session carried by a request, if any.
///
/// Implementations must treat missing, unknown and expired credentials as
/// `Ok(None)`. `Err` is reserved for failures to answer at all.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, ProviderError>;
}

/// Provider over a fixed token table. Used in tests and local development.
#[derive(Debug)]
pub struct MemorySessionProvider {
    cookie_name: String,
    sessions: HashMap<String, Session>,
    lookups: AtomicUsize,
}

impl MemorySessionProvider {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            sessions: HashMap::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_session(mut self, token: impl Into<String>, session: Session) -> Self {
        self.sessions.insert(token.into(), session);
        self
    }

    /// Number of times [`SessionProvider::get_session`] has been called.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for MemorySessionProvider {
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, ProviderError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let Some(token) = session_token(headers, &self.cookie_name) else {
            return Ok(None);
        };

        Ok(self
            .sessions
            .get(&token)
            .filter(|session| !session.session.is_expired())
            .cloned())
    }
}
