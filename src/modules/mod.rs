//! Feature modules.
//!
//! - [`auth`]: the delegated `/api/auth/*` surface behind the rate limiter
//! - [`pages`]: the gated home page, the sign-in landing page and health
//! - [`users`]: the identity record store

pub mod auth;
pub mod pages;
pub mod users;
