//! Identifier newtypes.
//!
//! The remote API assigns every id; locally they are opaque strings. The
//! newtypes keep a group id from being confused with a user or bot id when
//! threading them through the aggregation pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// Remote-assigned identifier of a group.
    GroupId
}

string_id! {
    /// Remote-assigned identifier of a user.
    UserId
}

string_id! {
    /// Remote-assigned identifier of a bot.
    BotId
}
