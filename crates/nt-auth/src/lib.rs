//! # nt Auth
//!
//! The boundary between the web layer and whatever validates sessions.
//!
//! The web layer only ever sees a [`SessionProvider`]: given the request
//! headers it answers with a resolved [`Session`](nt_models::Session), with
//! nothing, or with a [`ProviderError`] when it could not tell. Issuing
//! sessions, signing cookies and hashing passwords are out of scope here.
//!
//! - [`provider`]: the capability trait and an in-memory implementation
//! - [`db`]: a provider backed by the `_session` table
//! - [`cookies`]: reading the session token off a request
//! - [`handler`]: the delegated `/api/auth/*` surface
//! - [`error`]: provider failures

pub mod cookies;
pub mod db;
pub mod error;
pub mod handler;
pub mod provider;

pub use db::DbSessionProvider;
pub use error::ProviderError;
pub use handler::{AuthHandler, SessionEndpoints};
pub use provider::{MemorySessionProvider, SessionProvider};
