//! Per-requirement classification
//!
//! The tri-state verdict that drives the preflight report and the export
//! matrix. Classification is a total, pure function of the requirement value
//! alone: repeated calls on an unchanged requirement always agree.

use serde::{Deserialize, Serialize};
use tracematrix_model::Requirement;

/// Verdict over a single requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// No linked objective, or blank acceptance criteria
    Invalid,
    /// Traceable and specified, but not covered by any test case
    Gap,
    /// Linked upstream, specified, and covered
    Valid,
}

impl Classification {
    /// Label used in the exported matrix
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Gap => "Gap",
            Self::Valid => "Valid",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify one requirement
///
/// - [`Classification::Invalid`] if `objective_ids` is empty or
///   `acceptance_criteria` is blank after trimming whitespace.
/// - Otherwise [`Classification::Gap`] if `test_case_ids` is empty.
/// - Otherwise [`Classification::Valid`].
///
/// Whether a non-empty reference id resolves to a live entity is NOT
/// checked here: a requirement pointing only at deleted objectives still
/// classifies by list emptiness. The graph builder handles the same
/// condition differently (it drops unresolved edges); see
/// [`build_graph`](crate::graph::build_graph).
#[must_use]
pub fn classify(requirement: &Requirement) -> Classification {
    if requirement.objective_ids.is_empty() || requirement.acceptance_criteria.trim().is_empty() {
        return Classification::Invalid;
    }
    if requirement.test_case_ids.is_empty() {
        return Classification::Gap;
    }
    Classification::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlinked_and_unspecified_is_invalid() {
        let req = Requirement::new("r");
        assert_eq!(classify(&req), Classification::Invalid);
    }

    #[test]
    fn blank_criteria_is_invalid_even_when_linked() {
        let req = Requirement::new("r")
            .with_objectives(["O1"])
            .with_acceptance_criteria("   \t\n ");
        assert_eq!(classify(&req), Classification::Invalid);
    }

    #[test]
    fn no_objectives_is_invalid_even_when_specified() {
        let req = Requirement::new("r").with_acceptance_criteria("must support X");
        assert_eq!(classify(&req), Classification::Invalid);
    }

    #[test]
    fn linked_and_specified_without_tests_is_gap() {
        let req = Requirement::new("r")
            .with_objectives(["O1"])
            .with_acceptance_criteria("must support X");
        assert_eq!(classify(&req), Classification::Gap);
    }

    #[test]
    fn fully_traced_is_valid() {
        let req = Requirement::new("r")
            .with_objectives(["O1"])
            .with_acceptance_criteria("must support X")
            .with_test_cases(["T1"]);
        assert_eq!(classify(&req), Classification::Valid);
    }

    #[test]
    fn dangling_objective_ids_still_count_as_linked() {
        // Resolution is not checked: ids pointing nowhere keep the
        // requirement out of Invalid.
        let req = Requirement::new("r")
            .with_objectives(["no-such-objective"])
            .with_acceptance_criteria("must support X")
            .with_test_cases(["no-such-test"]);
        assert_eq!(classify(&req), Classification::Valid);
    }
}
