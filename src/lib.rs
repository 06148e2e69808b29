//! # nt
//!
//! A small web scaffold that puts one page behind a session check.
//!
//! Requests to gated paths (only `/` by default) are admitted when the
//! configured [`SessionProvider`](nt_auth::SessionProvider) recognises the
//! session cookie and redirected to `/sign-in` otherwise. Everything about
//! sessions themselves (issuing, signing, expiring) belongs to the provider.
//! The auth endpoints under `/api/auth/*` are forwarded to an
//! [`AuthHandler`](nt_auth::AuthHandler) behind a per-IP rate limiter.
//!
//! ```text
//! request -> logging -> metrics -> CORS -> session gate -> handler
//!                                              |
//!                                     SessionProvider::get_session
//! ```
//!
//! ## Layout
//!
//! - [`config`]: environment-driven [`Settings`](config::Settings)
//! - [`middleware`]: the session gate
//! - [`modules`]: auth delegation, pages and the user store
//! - [`router`]: route table and layers
//! - [`state`]: shared handles
//! - [`logging`], [`metrics`]: observability
//! - [`cli`]: user administration used by `nt-cli`
//!
//! ## Environment
//!
//! ```bash
//! BASE_URL=http://localhost:3000
//! DATABASE_URL=postgres://nt:nt@localhost/nt
//! SESSION_COOKIE_NAME=session
//! RATE_LIMIT_WINDOW_SECS=60
//! RATE_LIMIT_MAX=10
//! ```
//!
//! ## Rate limiting
//!
//! Counters are kept in process memory. They reset on restart and are not
//! shared between processes, so running N instances allows N times the
//! configured rate per client.

pub mod cli;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use nt_auth;
pub use nt_config;
pub use nt_core;
pub use nt_db;
pub use nt_models;
