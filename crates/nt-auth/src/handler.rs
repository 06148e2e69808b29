//! The delegated `/api/auth/*` surface.
//!
//! The web layer forwards every request under the auth prefix to an
//! [`AuthHandler`] and returns whatever it produces. The wire format belongs
//! to the handler, not to the router.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use axum::{
    Json,
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
};
use nt_core::AppError;
use serde_json::json;
use tracing::error;

use crate::provider::SessionProvider;

#[async_trait]
pub trait AuthHandler: Send + Sync {
    /// `path` is the part after the auth prefix, without a leading slash.
    async fn handle(
        &self,
        method: &Method,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<Response, AppError>;
}

/// Answers the read-only session endpoints from a [`SessionProvider`].
///
/// | Method | Path          | Response                         |
/// |--------|---------------|----------------------------------|
/// | GET    | `get-session` | the session JSON, or `null`      |
/// | GET    | `ok`          | `{"ok": true}`                   |
///
/// Known paths with another method yield 405, anything else 404.
#[derive(Clone)]
pub struct SessionEndpoints {
    provider: Arc<dyn SessionProvider>,
}

impl SessionEndpoints {
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AuthHandler for SessionEndpoints {
    async fn handle(
        &self,
        method: &Method,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<Response, AppError> {
        match (path.trim_matches('/'), method) {
            ("get-session", &Method::GET) => {
                let session = self.provider.get_session(headers).await.map_err(|e| {
                    error!(error = %e, "Session lookup failed");
                    AppError::upstream(e)
                })?;
                Ok(Json(session).into_response())
            }
            ("ok", &Method::GET) => Ok(Json(json!({ "ok": true })).into_response()),
            ("get-session" | "ok", _) => Err(AppError::method_not_allowed(anyhow!(
                "Method {} not allowed on /{}",
                method,
                path
            ))),
            _ => Err(AppError::not_found(anyhow!("Unknown auth endpoint: /{}", path))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::MemorySessionProvider;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use nt_models::Session;

    struct Down;

    #[async_trait]
    impl SessionProvider for Down {
        async fn get_session(&self, _: &HeaderMap) -> Result<Option<Session>, ProviderError> {
            Err(ProviderError::Unavailable("down".to_string()))
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn endpoints() -> SessionEndpoints {
        SessionEndpoints::new(Arc::new(MemorySessionProvider::new("session")))
    }

    #[tokio::test]
    async fn test_get_session_without_cookie_is_null() {
        let response = endpoints()
            .handle(&Method::GET, "get-session", &HeaderMap::new())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_ok_endpoint() {
        let response = endpoints()
            .handle(&Method::GET, "/ok", &HeaderMap::new())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["ok"], true);
    }

    #[tokio::test]
    async fn test_unknown_and_wrong_method() {
        let err = endpoints()
            .handle(&Method::POST, "sign-in/email", &HeaderMap::new())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = endpoints()
            .handle(&Method::POST, "get-session", &HeaderMap::new())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_provider_failure_is_500() {
        let err = SessionEndpoints::new(Arc::new(Down))
            .handle(&Method::GET, "get-session", &HeaderMap::new())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
