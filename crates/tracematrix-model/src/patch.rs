//! Partial-field update patches
//!
//! Mutation in the surrounding application is merge-based: an edit form
//! submits only the fields it changed. Each entity kind has a patch type
//! whose fields are all optional; `apply` copies the set fields onto the
//! entity and leaves the rest untouched. Patches perform no validation —
//! a patch may blank acceptance criteria or point reference lists at ids
//! that do not exist, and the store will accept it. Classification, not
//! rejection, is how such states are surfaced.

use crate::entities::{
    Design, DesignStatus, Objective, ObjectiveStatus, Priority, Requirement, RequirementStatus,
    TestCase, TestStatus,
};
use crate::id::{DesignId, ObjectiveId, TestCaseId};
use serde::{Deserialize, Serialize};

macro_rules! merge {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

/// Partial update for an [`Objective`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectivePatch {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New owner
    pub owner: Option<String>,
    /// New status
    pub status: Option<ObjectiveStatus>,
}

impl ObjectivePatch {
    /// Merge set fields onto the objective
    pub fn apply(self, objective: &mut Objective) {
        merge!(objective, self, title, description, owner, status);
    }
}

/// Partial update for a [`Requirement`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementPatch {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New source
    pub source: Option<String>,
    /// New owner
    pub owner: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New status
    pub status: Option<RequirementStatus>,
    /// Replacement acceptance criteria
    pub acceptance_criteria: Option<String>,
    /// Replacement objective links (the whole list, not a delta)
    pub objective_ids: Option<Vec<ObjectiveId>>,
    /// Replacement test case links
    pub test_case_ids: Option<Vec<TestCaseId>>,
    /// Replacement design links
    pub design_ids: Option<Vec<DesignId>>,
}

impl RequirementPatch {
    /// Merge set fields onto the requirement
    pub fn apply(self, requirement: &mut Requirement) {
        merge!(
            requirement,
            self,
            title,
            description,
            source,
            owner,
            priority,
            status,
            acceptance_criteria,
            objective_ids,
            test_case_ids,
            design_ids,
        );
    }
}

/// Partial update for a [`Design`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignPatch {
    /// New title
    pub title: Option<String>,
    /// New artifact URL
    pub url: Option<String>,
    /// New status
    pub status: Option<DesignStatus>,
}

impl DesignPatch {
    /// Merge set fields onto the design
    pub fn apply(self, design: &mut Design) {
        merge!(design, self, title, url, status);
    }
}

/// Partial update for a [`TestCase`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCasePatch {
    /// New title
    pub title: Option<String>,
    /// New execution status
    pub status: Option<TestStatus>,
}

impl TestCasePatch {
    /// Merge set fields onto the test case
    pub fn apply(self, test_case: &mut TestCase) {
        merge!(test_case, self, title, status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_fields_are_left_untouched() {
        let mut req = Requirement::new("Login")
            .with_acceptance_criteria("must support X")
            .with_objectives(["O1"]);
        let before_criteria = req.acceptance_criteria.clone();

        RequirementPatch {
            title: Some("Login v2".to_string()),
            ..Default::default()
        }
        .apply(&mut req);

        assert_eq!(req.title, "Login v2");
        assert_eq!(req.acceptance_criteria, before_criteria);
        assert_eq!(req.objective_ids.len(), 1);
    }

    #[test]
    fn reference_lists_are_replaced_wholesale() {
        let mut req = Requirement::new("Login").with_objectives(["O1", "O2"]);
        RequirementPatch {
            objective_ids: Some(vec![ObjectiveId::from("O3")]),
            ..Default::default()
        }
        .apply(&mut req);
        assert_eq!(req.objective_ids, vec![ObjectiveId::from("O3")]);
    }

    #[test]
    fn patch_may_blank_acceptance_criteria() {
        // No validation on merge: an emptying patch is accepted.
        let mut req = Requirement::new("Login").with_acceptance_criteria("x");
        RequirementPatch {
            acceptance_criteria: Some(String::new()),
            ..Default::default()
        }
        .apply(&mut req);
        assert_eq!(req.acceptance_criteria, "");
    }

    #[test]
    fn test_case_patch_updates_status() {
        let mut tc = TestCase::new("t");
        TestCasePatch {
            status: Some(TestStatus::Pass),
            ..Default::default()
        }
        .apply(&mut tc);
        assert_eq!(tc.status, TestStatus::Pass);
    }
}
