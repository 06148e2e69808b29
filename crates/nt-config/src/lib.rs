//! # nt Config
//!
//! Configuration types for the nt web scaffold.
//!
//! Values are read from the process environment (a `.env` file is loaded by
//! the binaries before any of these are constructed). Nothing here validates
//! the values beyond parsing numbers and booleans; malformed values fall back
//! to the defaults.
//!
//! - [`app`]: application name, public base URL and listen ports
//! - [`database`]: Postgres connection parameters
//! - [`cors`]: allowed browser origins
//! - [`rate_limit`]: per-client limits for the auth endpoints
//! - [`session`]: session cookie naming
//! - [`gate`]: the static list of gated routes and the sign-in path
//!
//! # Example
//!
//! ```ignore
//! use nt_config::{AppConfig, RateLimitConfig};
//!
//! let app = AppConfig::from_env();
//! let rate_limit = RateLimitConfig::from_env();
//! ```

pub mod app;
pub mod cors;
pub mod database;
pub mod gate;
pub mod rate_limit;
pub mod session;

mod env;

pub use app::AppConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use gate::{GateConfig, PROTECTED_ROUTES, SIGN_IN_PATH};
pub use rate_limit::RateLimitConfig;
pub use session::SessionConfig;
