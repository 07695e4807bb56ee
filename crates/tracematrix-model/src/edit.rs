//! Editing target discriminated union
//!
//! The entity currently being created or edited in the surrounding
//! application, as one tagged value over the four kinds. Consumers resolve
//! it by pattern match instead of structural guessing.

use crate::entities::{Design, Objective, Requirement, TestCase};
use crate::id::EntityKind;
use serde::{Deserialize, Serialize};

/// The entity under edit, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EditTarget {
    /// Editing an objective
    Objective(Objective),
    /// Editing a requirement
    Requirement(Requirement),
    /// Editing a design
    Design(Design),
    /// Editing a test case
    TestCase(TestCase),
}

impl EditTarget {
    /// Kind tag of the edited entity
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Objective(_) => EntityKind::Objective,
            Self::Requirement(_) => EntityKind::Requirement,
            Self::Design(_) => EntityKind::Design,
            Self::TestCase(_) => EntityKind::TestCase,
        }
    }

    /// Id string of the edited entity
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Objective(o) => o.id.as_str(),
            Self::Requirement(r) => r.id.as_str(),
            Self::Design(d) => d.id.as_str(),
            Self::TestCase(t) => t.id.as_str(),
        }
    }

    /// Title of the edited entity
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Objective(o) => &o.title,
            Self::Requirement(r) => &r.title,
            Self::Design(d) => &d.title,
            Self::TestCase(t) => &t.title,
        }
    }
}

impl From<Objective> for EditTarget {
    fn from(o: Objective) -> Self {
        Self::Objective(o)
    }
}

impl From<Requirement> for EditTarget {
    fn from(r: Requirement) -> Self {
        Self::Requirement(r)
    }
}

impl From<Design> for EditTarget {
    fn from(d: Design) -> Self {
        Self::Design(d)
    }
}

impl From<TestCase> for EditTarget {
    fn from(t: TestCase) -> Self {
        Self::TestCase(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_id_follow_the_variant() {
        let target = EditTarget::from(Requirement::new("Login").with_id("R1"));
        assert_eq!(target.kind(), EntityKind::Requirement);
        assert_eq!(target.id(), "R1");
        assert_eq!(target.title(), "Login");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let target = EditTarget::from(Objective::new("Ship it").with_id("O1"));
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["kind"], "Objective");
        assert_eq!(json["id"], "O1");
    }
}
