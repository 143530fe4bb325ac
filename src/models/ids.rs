//! Strongly-typed ID wrappers for ledger records
//!
//! Newtype wrappers keep entry and recurring-expense IDs from being mixed up
//! at compile time. New records get UUIDs; documents written by the browser
//! ledger carry millisecond timestamps instead, which are kept as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stored form of an ID: a UUID string or a legacy numeric timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum RawId {
    Uuid(Uuid),
    Legacy(u64),
}

impl RawId {
    fn parse(s: &str) -> Result<Self, IdParseError> {
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Ok(Self::Uuid(uuid));
        }
        s.parse::<u64>()
            .map(Self::Legacy)
            .map_err(|_| IdParseError(s.to_string()))
    }
}

/// Error for strings that are neither a UUID nor a numeric ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid ID: {}", self.0)
    }
}

impl std::error::Error for IdParseError {}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(RawId::Uuid(Uuid::new_v4()))
            }

            /// Short display form, e.g. `ent-1a2b3c4d`
            pub fn short(&self) -> String {
                self.to_string()
            }

            /// Check whether a user-supplied identifier refers to this ID
            ///
            /// Accepts the full UUID, the short display form, or the bare
            /// 8-character UUID prefix. Numeric IDs match only in full.
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                match self.0 {
                    RawId::Uuid(uuid) => {
                        if let Ok(parsed) = Uuid::parse_str(s) {
                            return parsed == uuid;
                        }
                        s.len() >= 8 && uuid.to_string().starts_with(&s.to_lowercase())
                    }
                    RawId::Legacy(n) => s.parse::<u64>().map_or(false, |v| v == n),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    RawId::Uuid(uuid) => {
                        write!(f, "{}{}", $display_prefix, &uuid.to_string()[..8])
                    }
                    RawId::Legacy(n) => write!(f, "{}{}", $display_prefix, n),
                }
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(RawId::Uuid(uuid))
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                RawId::parse(s.strip_prefix($display_prefix).unwrap_or(s)).map(Self)
            }
        }
    };
}

define_id!(EntryId, "ent-");
define_id!(RecurringId, "rec-");
