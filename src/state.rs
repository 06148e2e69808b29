use std::sync::Arc;

use nt_auth::{AuthHandler, SessionEndpoints, SessionProvider};

use crate::config::Settings;
use crate::middleware::session_gate::SessionGate;

/// Shared per-process handles. Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub session_provider: Arc<dyn SessionProvider>,
    pub auth_handler: Arc<dyn AuthHandler>,
    pub gate: SessionGate,
}

impl AppState {
    /// Wires the gate and the auth endpoints to one session provider.
    pub fn new(settings: Settings, session_provider: Arc<dyn SessionProvider>) -> Self {
        let auth_handler: Arc<dyn AuthHandler> =
            Arc::new(SessionEndpoints::new(session_provider.clone()));
        Self::with_auth_handler(settings, session_provider, auth_handler)
    }

    pub fn with_auth_handler(
        settings: Settings,
        session_provider: Arc<dyn SessionProvider>,
        auth_handler: Arc<dyn AuthHandler>,
    ) -> Self {
        let gate = SessionGate::new(&settings.gate, &settings.app.base_url, session_provider.clone());
        Self {
            settings,
            session_provider,
            auth_handler,
            gate,
        }
    }
}
