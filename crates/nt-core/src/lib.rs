//! # nt Core
//!
//! Foundational types shared by every crate in the workspace.
//!
//! - [`errors`]: the HTTP-facing [`AppError`] used by handlers and middleware
//!
//! # Example
//!
//! ```ignore
//! use nt_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Unknown auth endpoint"));
//! ```

pub mod errors;

pub use errors::{AppError, UPSTREAM_MESSAGE};
