use axum::{Router, routing::get};

use super::controller::{health, home, sign_in};
use crate::state::AppState;

pub fn init_pages_router(sign_in_path: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route(sign_in_path, get(sign_in))
        .route("/health", get(health))
}
