//! Application-level settings.
//!
//! # Environment Variables
//!
//! - `APP_NAME`: display name (default: `nt`)
//! - `BASE_URL`: public origin of the application, used when an inbound
//!   request carries no usable `Host` (default: `http://localhost:3000`)
//! - `PORT`: HTTP listen port (default: `3000`)
//! - `METRICS_PORT`: Prometheus listener port (default: `9090`)

use crate::env::{parse_or, process_env};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    /// Kept as the raw string; consumers parse it when they need an origin.
    pub base_url: String,
    pub port: u16,
    pub metrics_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "nt".to_string(),
            base_url: "http://localhost:3000".to_string(),
            port: 3000,
            metrics_port: 9090,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            base_url: lookup("BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.base_url),
            port: parse_or(&lookup, "PORT", defaults.port),
            metrics_port: parse_or(&lookup, "METRICS_PORT", defaults.metrics_port),
        }
    }
}
