use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Request, Response};
use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use nt::config::Settings;
use nt::router::init_router;
use nt::state::AppState;
use nt_auth::{ProviderError, SessionProvider};
use nt_models::{Email, Session, SessionId, SessionRecord, User, UserId};
use uuid::Uuid;

#[allow(dead_code)]
pub const VALID_TOKEN: &str = "valid-token";

#[allow(dead_code)]
/// Settings with rate limiting off unless a test turns it on.
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.rate_limit.enabled = false;
    settings
}

#[allow(dead_code)]
pub fn test_app(provider: Arc<dyn SessionProvider>) -> axum::Router {
    test_app_with(test_settings(), provider)
}

#[allow(dead_code)]
pub fn test_app_with(settings: Settings, provider: Arc<dyn SessionProvider>) -> axum::Router {
    init_router(AppState::new(settings, provider))
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn fake_name() -> String {
    Name().fake()
}

#[allow(dead_code)]
/// A session for a user that exists only in memory.
pub fn sample_session(expires_in: Duration) -> Session {
    let now = Utc::now();
    let user = User {
        id: UserId::new(),
        name: fake_name(),
        email: Email::new(generate_unique_email()).unwrap(),
        created_at: now,
        updated_at: now,
    };

    Session {
        session: SessionRecord {
            id: SessionId::new(),
            token: VALID_TOKEN.to_string(),
            user_id: user.id,
            expires_at: now + expires_in,
            ip_address: Some("127.0.0.1".to_string()),
            user_agent: Some("integration-test".to_string()),
            created_at: now,
            updated_at: now,
        },
        user,
    }
}

#[allow(dead_code)]
/// Provider that can never answer.
pub struct FailingProvider;

#[async_trait]
impl SessionProvider for FailingProvider {
    async fn get_session(&self, _headers: &HeaderMap) -> Result<Option<Session>, ProviderError> {
        Err(ProviderError::Unavailable("connection refused".to_string()))
    }
}

#[allow(dead_code)]
pub fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

#[allow(dead_code)]
pub fn empty(builder: axum::http::request::Builder) -> Request<Body> {
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
