//! Strongly-typed ID newtypes.
//!
//! IDs are UUID version 7: the leading 48 bits are a Unix millisecond
//! timestamp, so IDs sort in creation order without a database sequence.
//! `Uuid::now_v7` also keeps IDs generated by one process strictly
//! increasing when several are minted within the same millisecond.
//!
//! # Example
//!
//! ```ignore
//! use nt_models::ids::UserId;
//!
//! let first = UserId::new();
//! let second = UserId::new();
//! assert!(first < second);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Mint a new time-ordered ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            #[inline]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            #[inline]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            /// Milliseconds since the Unix epoch embedded in a v7 ID.
            ///
            /// `None` for IDs of any other version.
            pub fn timestamp_millis(&self) -> Option<u64> {
                let (secs, nanos) = self.0.get_timestamp()?.to_unix();
                Some(secs * 1000 + u64::from(nanos) / 1_000_000)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`crate::users::User`].
    UserId
);

define_id!(
    /// Identifier of a [`crate::sessions::SessionRecord`].
    SessionId
);
