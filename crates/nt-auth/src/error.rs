use thiserror::Error;

/// The provider could not decide whether a session exists.
///
/// Distinct from "no session", which is `Ok(None)`.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("session storage error: {0}")]
    Storage(#[from] sqlx::Error),
    /// For providers backed by something other than the bundled database,
    /// such as a remote auth service.
    #[error("session provider unavailable: {0}")]
    Unavailable(String),
}
