use crate::env::process_env;

pub const DEFAULT_SESSION_COOKIE: &str = "session";

/// Where the session token travels on inbound requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Cookie carrying the opaque session token (`SESSION_COOKIE_NAME`).
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cookie_name: lookup("SESSION_COOKIE_NAME")
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_name_default_and_override() {
        assert_eq!(SessionConfig::from_lookup(|_| None).cookie_name, "session");
        let config = SessionConfig::from_lookup(|_| Some("nt.session_token".to_string()));
        assert_eq!(config.cookie_name, "nt.session_token");
    }
}
