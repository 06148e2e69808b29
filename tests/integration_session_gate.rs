mod common;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use chrono::Duration;
use common::{
    FailingProvider, VALID_TOKEN, body_json, empty, get, sample_session, test_app, test_app_with,
    test_settings,
};
use nt_auth::MemorySessionProvider;
use nt_core::UPSTREAM_MESSAGE;
use tower::ServiceExt;

fn provider_with_valid_session() -> Arc<MemorySessionProvider> {
    Arc::new(
        MemorySessionProvider::new("session")
            .with_session(VALID_TOKEN, sample_session(Duration::hours(1))),
    )
}

#[tokio::test]
async fn test_root_with_valid_session_passes_through() {
    let provider = provider_with_valid_session();
    let app = test_app(provider.clone());

    let response = app
        .oneshot(empty(
            get("/")
                .header(header::HOST, "localhost:3000")
                .header(header::COOKIE, format!("session={}", VALID_TOKEN)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
    assert_eq!(provider.lookups(), 1);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Welcome to nt");
}

#[tokio::test]
async fn test_root_without_cookie_redirects_to_sign_in() {
    let provider = provider_with_valid_session();
    let app = test_app(provider.clone());

    let response = app
        .oneshot(empty(get("/").header(header::HOST, "localhost:3000")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "http://localhost:3000/sign-in"
    );
    assert_eq!(provider.lookups(), 1);
}

#[tokio::test]
async fn test_redirect_preserves_forwarded_scheme_and_host() {
    let app = test_app(provider_with_valid_session());

    let response = app
        .oneshot(empty(
            get("/")
                .header(header::HOST, "nt.example.com")
                .header("x-forwarded-proto", "https"),
        ))
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://nt.example.com/sign-in"
    );
}

#[tokio::test]
async fn test_redirect_ignores_foreign_forwarded_host() {
    let app = test_app(provider_with_valid_session());

    let response = app
        .oneshot(empty(
            get("/")
                .header(header::HOST, "localhost:3000")
                .header("x-forwarded-host", "evil.example"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "http://localhost:3000/sign-in"
    );
}

#[tokio::test]
async fn test_redirect_preserves_absolute_request_origin() {
    let app = test_app(provider_with_valid_session());

    let response = app
        .oneshot(empty(get("http://127.0.0.1:8080/?next=home")))
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers()[header::LOCATION],
        "http://127.0.0.1:8080/sign-in"
    );
}

#[tokio::test]
async fn test_unknown_and_expired_tokens_redirect() {
    let provider = Arc::new(
        MemorySessionProvider::new("session")
            .with_session("stale-token", sample_session(Duration::minutes(-1))),
    );

    for cookie in ["session=stale-token", "session=forged-token", "other=valid-token"] {
        let response = test_app(provider.clone())
            .oneshot(empty(
                get("/")
                    .header(header::HOST, "localhost:3000")
                    .header(header::COOKIE, cookie),
            ))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::TEMPORARY_REDIRECT,
            "cookie {cookie} should not be admitted"
        );
        assert_eq!(
            response.headers()[header::LOCATION],
            "http://localhost:3000/sign-in"
        );
    }
}

#[tokio::test]
async fn test_ungated_paths_never_query_provider() {
    let provider = provider_with_valid_session();

    let response = test_app(provider.clone())
        .oneshot(empty(get("/other-path")))
        .await
        .unwrap();
    assert!(!response.status().is_redirection());
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = test_app(provider.clone())
        .oneshot(empty(get("/sign-in")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = test_app(provider.clone())
        .oneshot(empty(get("/health")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    assert_eq!(provider.lookups(), 0);
}

#[tokio::test]
async fn test_provider_failure_is_server_error_not_redirect() {
    let app = test_app(Arc::new(FailingProvider));

    let response = app
        .oneshot(empty(
            get("/")
                .header(header::HOST, "localhost:3000")
                .header(header::COOKIE, format!("session={}", VALID_TOKEN)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::LOCATION).is_none());
    let body = body_json(response).await;
    assert_eq!(body["error"], UPSTREAM_MESSAGE);
    assert!(!body.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_provider_failure_does_not_affect_ungated_paths() {
    let response = test_app(Arc::new(FailingProvider))
        .oneshot(empty(get("/health")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_custom_cookie_name() {
    let provider = Arc::new(
        MemorySessionProvider::new("nt.session_token")
            .with_session(VALID_TOKEN, sample_session(Duration::hours(1))),
    );
    let mut settings = test_settings();
    settings.session.cookie_name = "nt.session_token".to_string();

    let response = test_app_with(settings, provider)
        .oneshot(empty(
            get("/").header(header::COOKIE, format!("nt.session_token={}", VALID_TOKEN)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
