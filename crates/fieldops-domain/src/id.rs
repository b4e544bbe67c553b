//! Newtype wrappers for domain identifiers.
//!
//! All records are keyed by the database's auto-increment integer ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Identifies a user account (client, technician, supervisor or administrator).
    UserId
);

numeric_id!(
    /// Identifies a work order.
    OrderId
);

numeric_id!(
    /// Identifies a progress entry in an order's log.
    EntryId
);

numeric_id!(
    /// Identifies a photo attached to a progress entry.
    AttachmentId
);

numeric_id!(
    /// Identifies an entry of the status catalog.
    StatusId
);
