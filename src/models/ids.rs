//! Strongly-typed entity IDs
//!
//! Each entity gets its own uuid-backed newtype so a transaction ID can
//! never stand in for a goal ID. The short display form (`txn-1a2b3c4d`)
//! is what the CLI prints and accepts back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse from a full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Short form: prefix plus the first 8 hex chars
                write!(f, "{}{}", $prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept the bare UUID or the prefixed form
                let bare = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(bare).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifier for a recorded transaction
    TransactionId,
    "txn-"
);
entity_id!(
    /// Identifier for a savings goal
    GoalId,
    "goal-"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn test_short_display_form() {
        let id = GoalId::new();
        let display = id.to_string();
        assert!(display.starts_with("goal-"));
        assert_eq!(display.len(), "goal-".len() + 8);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_parse_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = GoalId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        // FromStr also accepts the prefixed form of a full UUID
        let prefixed = format!("goal-{}", uuid_str);
        let parsed: GoalId = prefixed.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("goal-notauuid".parse::<GoalId>().is_err());
    }

    #[test]
    fn test_id_types_stay_separate() {
        // Distinct types at compile time; only the raw UUIDs compare
        let txn = TransactionId::new();
        let goal = GoalId::new();
        assert_ne!(txn.as_uuid(), goal.as_uuid());
    }
}
