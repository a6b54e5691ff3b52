//! Strongly-typed ID wrappers for all entity types
//!
//! Each stored entity gets its own newtype so an income source id can never
//! be handed to the goal repository by mistake.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                s.parse()
            }

            /// True when `reference` names this id: the short display form
            /// (`prefix-xxxxxxxx`), the bare short hex, or the full UUID.
            pub fn matches_reference(&self, reference: &str) -> bool {
                let reference = reference.trim();
                if reference.is_empty() {
                    return false;
                }
                let full = self.0.to_string();
                let bare = reference.strip_prefix($display_prefix).unwrap_or(reference);
                bare.len() >= 8 && full.starts_with(bare)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(IncomeSourceId, "inc-");
define_id!(IncomeEntryId, "ent-");
define_id!(SavingsRecordId, "sav-");
define_id!(GoalId, "goal-");
