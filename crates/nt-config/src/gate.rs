//! Static route-gating configuration.
//!
//! The gated routes are fixed at build time; there is no environment
//! override. A pattern is either an exact path (`/`) or a prefix followed by
//! `/:path*`, which covers the prefix itself and everything beneath it
//! (`/dashboard/:path*` gates `/dashboard` and `/dashboard/settings`).

/// Paths that must carry a valid session.
pub const PROTECTED_ROUTES: &[&str] = &["/"];

/// Redirect target for requests without a session.
pub const SIGN_IN_PATH: &str = "/sign-in";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub matcher: Vec<String>,
    pub sign_in_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            matcher: PROTECTED_ROUTES.iter().map(|p| p.to_string()).collect(),
            sign_in_path: SIGN_IN_PATH.to_string(),
        }
    }
}
