//! Process-wide settings.
//!
//! Each concern has its own type in the `nt-config` crate; [`Settings`]
//! gathers them so startup reads the environment in one place.
//!
//! # Example
//!
//! ```ignore
//! use nt::config::Settings;
//!
//! dotenvy::dotenv().ok();
//! let settings = Settings::from_env();
//! ```

pub use nt_config::{
    AppConfig, CorsConfig, DatabaseConfig, GateConfig, RateLimitConfig, SessionConfig,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub session: SessionConfig,
    pub gate: GateConfig,
}

impl Settings {
    pub fn from_env() -> Self {
        let app = AppConfig::from_env();
        let cors = CorsConfig::from_env(&app.base_url);
        Self {
            app,
            database: DatabaseConfig::from_env(),
            cors,
            rate_limit: RateLimitConfig::from_env(),
            session: SessionConfig::from_env(),
            gate: GateConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let app = AppConfig::default();
        let cors = CorsConfig::from_lookup(|_| None, &app.base_url);
        Self {
            app,
            database: DatabaseConfig::from_lookup(|_| None),
            cors,
            rate_limit: RateLimitConfig::default(),
            session: SessionConfig::default(),
            gate: GateConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(settings.gate.matcher, vec!["/"]);
        assert_eq!(settings.session.cookie_name, "session");
        assert!(settings.database.url.is_none());
    }
}
