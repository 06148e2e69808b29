use crate::env::process_env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Reads `ALLOWED_ORIGINS` (comma separated), defaulting to `base_url`.
    pub fn from_env(base_url: &str) -> Self {
        Self::from_lookup(process_env, base_url)
    }

    pub fn from_lookup<F>(lookup: F, base_url: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| base_url.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }
}
