use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

/// The gated destination. Only reached with a valid session.
pub async fn home(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}", state.settings.app.app_name),
    }))
}

/// Landing page for unauthenticated visitors.
pub async fn sign_in(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Sign in to continue",
        "session": "/api/auth/get-session",
        "app": state.settings.app.app_name,
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
