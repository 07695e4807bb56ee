//! Kind-scoped entity identifiers
//!
//! Each entity kind has its own id newtype, so an `ObjectiveId` can never be
//! used to look up a `Requirement`. Id strings are unique within a kind but
//! the id space is not shared across kinds: an Objective and a Requirement
//! may carry the same string without conflict.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Generate a fresh id
            #[inline]
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// View the id as a string slice
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::generate()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

entity_id! {
    /// Identifier of an [`Objective`](crate::Objective)
    ObjectiveId
}

entity_id! {
    /// Identifier of a [`Requirement`](crate::Requirement)
    RequirementId
}

entity_id! {
    /// Identifier of a [`Design`](crate::Design)
    DesignId
}

entity_id! {
    /// Identifier of a [`TestCase`](crate::TestCase)
    TestCaseId
}

/// The four entity kinds of the traceability matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Top-level strategic goal; referenced but never referencing
    Objective,
    /// The only entity with outgoing references
    Requirement,
    /// Downstream design artifact
    Design,
    /// Downstream verification artifact
    TestCase,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Objective => "objective",
            Self::Requirement => "requirement",
            Self::Design => "design",
            Self::TestCase => "test case",
        };
        write!(f, "{s}")
    }
}
