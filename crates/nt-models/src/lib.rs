//! # nt Models
//!
//! Domain models shared between the HTTP layer, the session provider and the
//! CLI.
//!
//! - [`ids`]: time-ordered UUID newtypes
//! - [`value_types`]: validated primitives ([`Email`])
//! - [`users`]: the identity record and its insert/update shapes
//! - [`sessions`]: a resolved session and the row it came from

pub mod ids;
pub mod sessions;
pub mod users;
pub mod value_types;

pub use ids::{SessionId, UserId};
pub use sessions::{Session, SessionRecord};
pub use users::{NAME_MAX_LEN, NewUser, UpdateUser, User};
pub use value_types::{EMAIL_MAX_LEN, Email, ValueTypeError};
