//! Entity types of the traceability matrix
//!
//! Four uniquely-keyed entity kinds. Only [`Requirement`] carries outgoing
//! references; Objectives, Designs and TestCases are terminal and never store
//! back-references. All edges of the trace graph are discoverable only by
//! scanning requirement reference lists.
//!
//! Reference lists are ordered and may contain duplicates or ids that do not
//! resolve to a live entity (dangling references). Nothing in this crate
//! checks resolution; the engine decides per operation how dangling ids are
//! treated.

use crate::id::{DesignId, ObjectiveId, RequirementId, TestCaseId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an [`Objective`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectiveStatus {
    /// Newly created, not yet committed to
    #[default]
    Draft,
    /// Actively pursued
    Active,
    /// Delivered
    Completed,
}

/// Lifecycle status of a [`Requirement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequirementStatus {
    /// Newly created
    #[default]
    Draft,
    /// Signed off by its owner
    Approved,
    /// Implemented in a design artifact
    Implemented,
    /// Covered by passing tests
    Verified,
}

/// Lifecycle status of a [`Design`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DesignStatus {
    /// Work in progress
    #[default]
    Draft,
    /// Under review
    InReview,
    /// Accepted
    Approved,
}

/// Execution status of a [`TestCase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TestStatus {
    /// Last run passed
    Pass,
    /// Last run failed
    Fail,
    /// Never executed
    #[default]
    NotRun,
}

/// Requirement priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Nice to have
    Low,
    /// Default priority
    #[default]
    Medium,
    /// Important
    High,
    /// Release blocking
    Critical,
}

/// Top-level strategic goal
///
/// Terminal entity: never references other kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// Unique within the objective kind
    pub id: ObjectiveId,
    /// Short name
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Accountable person or team
    pub owner: String,
    /// Lifecycle status
    pub status: ObjectiveStatus,
}

impl Objective {
    /// Create an objective with a generated id and default status
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ObjectiveId::generate(),
            title: title.into(),
            description: String::new(),
            owner: String::new(),
            status: ObjectiveStatus::default(),
        }
    }

    /// With an explicit id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ObjectiveId>) -> Self {
        self.id = id.into();
        self
    }

    /// With a description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With an owner
    #[inline]
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }
}

/// Unit of classification and the only entity with outgoing references
///
/// `objective_ids` point upstream; `design_ids` and `test_case_ids` point
/// downstream. The lists are ordered, duplicates are permitted, and ids are
/// not required to resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Unique within the requirement kind
    pub id: RequirementId,
    /// Short name
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Where the requirement came from (stakeholder, regulation, ...)
    pub source: String,
    /// Accountable person or team
    pub owner: String,
    /// Priority
    pub priority: Priority,
    /// Lifecycle status
    pub status: RequirementStatus,
    /// Verifiable acceptance criteria; blank criteria make the requirement
    /// incomplete
    pub acceptance_criteria: String,
    /// Upstream objectives this requirement traces to
    pub objective_ids: Vec<ObjectiveId>,
    /// Downstream test cases verifying this requirement
    pub test_case_ids: Vec<TestCaseId>,
    /// Downstream design artifacts realizing this requirement
    pub design_ids: Vec<DesignId>,
}

impl Requirement {
    /// Create a requirement with a generated id, default priority/status and
    /// empty reference lists
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: RequirementId::generate(),
            title: title.into(),
            description: String::new(),
            source: String::new(),
            owner: String::new(),
            priority: Priority::default(),
            status: RequirementStatus::default(),
            acceptance_criteria: String::new(),
            objective_ids: Vec::new(),
            test_case_ids: Vec::new(),
            design_ids: Vec::new(),
        }
    }

    /// With an explicit id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<RequirementId>) -> Self {
        self.id = id.into();
        self
    }

    /// With a description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With acceptance criteria
    #[inline]
    #[must_use]
    pub fn with_acceptance_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.acceptance_criteria = criteria.into();
        self
    }

    /// With a priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// With upstream objective links
    #[must_use]
    pub fn with_objectives<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ObjectiveId>,
    {
        self.objective_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// With downstream test case links
    #[must_use]
    pub fn with_test_cases<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TestCaseId>,
    {
        self.test_case_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// With downstream design links
    #[must_use]
    pub fn with_designs<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<DesignId>,
    {
        self.design_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Downstream design artifact
///
/// Terminal entity: referenced by requirements, never referencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Unique within the design kind
    pub id: DesignId,
    /// Short name
    pub title: String,
    /// Location of the artifact (document, drawing, repo path)
    pub url: String,
    /// Lifecycle status
    pub status: DesignStatus,
}

impl Design {
    /// Create a design with a generated id and default status
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: DesignId::generate(),
            title: title.into(),
            url: String::new(),
            status: DesignStatus::default(),
        }
    }

    /// With an explicit id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<DesignId>) -> Self {
        self.id = id.into();
        self
    }

    /// With an artifact URL
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Downstream verification artifact
///
/// Terminal entity: referenced by requirements, never referencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Unique within the test case kind
    pub id: TestCaseId,
    /// Short name
    pub title: String,
    /// Last execution outcome
    pub status: TestStatus,
}

impl TestCase {
    /// Create a test case with a generated id, never run
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TestCaseId::generate(),
            title: title.into(),
            status: TestStatus::default(),
        }
    }

    /// With an explicit id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<TestCaseId>) -> Self {
        self.id = id.into();
        self
    }

    /// With an execution status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TestStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_requirement_has_empty_reference_lists() {
        let req = Requirement::new("Login");
        assert!(req.objective_ids.is_empty());
        assert!(req.test_case_ids.is_empty());
        assert!(req.design_ids.is_empty());
        assert_eq!(req.priority, Priority::Medium);
        assert_eq!(req.status, RequirementStatus::Draft);
    }

    #[test]
    fn builder_sets_reference_lists_in_order() {
        let req = Requirement::new("Login")
            .with_objectives(["O2", "O1", "O2"])
            .with_test_cases(["T1"]);
        let ids: Vec<&str> = req.objective_ids.iter().map(|o| o.as_str()).collect();
        // Order preserved, duplicates kept: the model never deduplicates.
        assert_eq!(ids, vec!["O2", "O1", "O2"]);
        assert_eq!(req.test_case_ids.len(), 1);
    }

    #[test]
    fn test_case_defaults_to_not_run() {
        assert_eq!(TestCase::new("t").status, TestStatus::NotRun);
    }

    #[test]
    fn requirement_round_trips_through_json() {
        let req = Requirement::new("R")
            .with_id("R1")
            .with_acceptance_criteria("must support X")
            .with_objectives(["O1"]);
        let json = serde_json::to_string(&req).unwrap();
        let back: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }
}
