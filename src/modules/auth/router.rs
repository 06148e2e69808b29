use std::sync::Arc;

use axum::{Router, routing::get};
use nt_config::RateLimitConfig;
use tower_governor::GovernorLayer;
use tracing::warn;

use super::controller::delegate;
use crate::state::AppState;

/// `GET`/`POST /{*all}`, to be nested under `/api/auth`.
///
/// The limiter keeps its counters in this router, so each call starts with
/// fresh buckets.
pub fn init_auth_router(rate_limit: &RateLimitConfig) -> Router<AppState> {
    let router = Router::new().route("/{*all}", get(delegate).post(delegate));

    if !rate_limit.enabled {
        return router;
    }

    match rate_limit.auth_governor_config() {
        Some(config) => router.layer(GovernorLayer::new(Arc::new(config))),
        None => {
            warn!(?rate_limit, "Invalid rate limit settings, auth endpoints are unlimited");
            router
        }
    }
}
