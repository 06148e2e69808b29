//! The identity record store.
//!
//! Writes go through [`UserService`]; the model types live in `nt-models`.

pub mod error;
pub mod service;

pub use error::UserStoreError;
pub use service::UserService;
