//! Request middleware.
//!
//! - [`session_gate`]: admits requests on gated paths only with a session,
//!   redirecting everyone else to the sign-in page
//!
//! Request logging and metrics live in [`crate::logging`] and
//! [`crate::metrics`].

pub mod session_gate;

pub use session_gate::{GateDecision, RouteMatcher, SessionGate, session_gate};
