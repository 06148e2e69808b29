//! Rate limiting configuration for the auth endpoints.
//!
//! Limits are expressed the way operators think about them, as "at most
//! `max_requests` per `window_secs` seconds per client", and translated into
//! a Governor token bucket: the bucket holds `max_requests` tokens and
//! regains one every `window_secs / max_requests`.
//!
//! # Environment Variables
//!
//! - `RATE_LIMIT_ENABLED`: set to `false` to drop the limiter (default: `true`)
//! - `RATE_LIMIT_WINDOW_SECS`: window length in seconds (default: `60`)
//! - `RATE_LIMIT_MAX`: requests allowed per window (default: `10`)
//!
//! # Storage
//!
//! Counters live in process memory. They reset on restart and are not shared
//! between processes, so N workers each allow `max_requests` per window.

use std::time::Duration;

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;

use crate::env::{flag_or, parse_or, process_env};

pub type AuthGovernorConfig = GovernorConfig<PeerIpKeyExtractor, ::governor::middleware::NoOpMiddleware>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Length of the counting window in seconds.
    pub window_secs: u64,
    /// Requests allowed per client within one window.
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_secs: 60,
            max_requests: 10,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            enabled: flag_or(&lookup, "RATE_LIMIT_ENABLED", defaults.enabled),
            window_secs: parse_or(&lookup, "RATE_LIMIT_WINDOW_SECS", defaults.window_secs).max(1),
            max_requests: parse_or(&lookup, "RATE_LIMIT_MAX", defaults.max_requests).max(1),
        }
    }

    /// Interval after which one more request is allowed.
    pub fn replenish_period(&self) -> Duration {
        let max = u64::from(self.max_requests.max(1));
        let window_ms = self.window_secs.max(1) * 1000;
        Duration::from_millis((window_ms / max).max(1))
    }

    /// Builds the Governor configuration keyed by the peer address.
    ///
    /// Forwarding headers are ignored since any client can set them. The
    /// server must be run with `ConnectInfo<SocketAddr>` available.
    pub fn auth_governor_config(&self) -> Option<AuthGovernorConfig> {
        GovernorConfigBuilder::default()
            .period(self.replenish_period())
            .burst_size(self.max_requests.max(1))
            .key_extractor(PeerIpKeyExtractor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ten_per_minute() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.window_secs, 60);
        assert_eq!(config.max_requests, 10);
        assert_eq!(config.replenish_period(), Duration::from_secs(6));
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = RateLimitConfig::from_lookup(|key| match key {
            "RATE_LIMIT_ENABLED" => Some("false".to_string()),
            "RATE_LIMIT_WINDOW_SECS" => Some("30".to_string()),
            "RATE_LIMIT_MAX" => Some("3".to_string()),
            _ => None,
        });
        assert!(!config.enabled);
        assert_eq!(config.window_secs, 30);
        assert_eq!(config.max_requests, 3);
        assert_eq!(config.replenish_period(), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let config = RateLimitConfig::from_lookup(|key| match key {
            "RATE_LIMIT_WINDOW_SECS" | "RATE_LIMIT_MAX" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.window_secs, 1);
        assert_eq!(config.max_requests, 1);
    }

    #[test]
    fn test_tiny_window_never_yields_zero_period() {
        let config = RateLimitConfig {
            enabled: true,
            window_secs: 1,
            max_requests: 5000,
        };
        assert_eq!(config.replenish_period(), Duration::from_millis(1));
    }

    #[test]
    fn test_governor_config_builds() {
        assert!(RateLimitConfig::default().auth_governor_config().is_some());
    }
}
