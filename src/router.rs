use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::session_gate::session_gate;
use crate::modules::auth::router::init_auth_router;
use crate::modules::pages::router::init_pages_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

/// Builds the application router.
///
/// Layer order, outermost first: logging, metrics, CORS, session gate. The
/// gate wraps every route and the fallback, and decides per request path
/// whether it has anything to check.
pub fn init_router(state: AppState) -> Router {
    let settings = &state.settings;

    let allowed_origins: Vec<HeaderValue> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true);

    Router::new()
        .merge(init_pages_router(&settings.gate.sign_in_path))
        .nest("/api/auth", init_auth_router(&settings.rate_limit))
        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
