//! One-hop impact analysis
//!
//! Resolves a requirement's upstream objectives and downstream designs and
//! test cases by id lookup against a snapshot. Resolution is built on
//! [`EntityIndex`], an id-indexed borrow of the snapshot, so cost is one
//! O(n) index build plus O(1) per reference.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracematrix_model::{Design, Objective, Requirement, TestCase};

/// Upstream and downstream entities reachable from one requirement
///
/// Ids that do not resolve are silently omitted; a requirement with empty
/// reference lists yields three empty vectors. There is no failure mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    /// Upstream objectives the requirement traces to
    pub objectives: Vec<Objective>,
    /// Downstream design artifacts
    pub designs: Vec<Design>,
    /// Downstream test cases
    pub test_cases: Vec<TestCase>,
}

impl Impact {
    /// Whether nothing resolved
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty() && self.designs.is_empty() && self.test_cases.is_empty()
    }
}

/// Id-indexed view of an entity snapshot
///
/// Build once per snapshot, resolve many requirements against it. Lookups
/// are kind-scoped; a duplicate id within one kind keeps the last entry,
/// which cannot happen for snapshots that honor per-kind id uniqueness.
#[derive(Debug)]
pub struct EntityIndex<'a> {
    objectives: HashMap<&'a str, &'a Objective>,
    designs: HashMap<&'a str, &'a Design>,
    test_cases: HashMap<&'a str, &'a TestCase>,
}

impl<'a> EntityIndex<'a> {
    /// Index the three terminal-entity collections by id
    #[must_use]
    pub fn new(
        objectives: &'a [Objective],
        designs: &'a [Design],
        test_cases: &'a [TestCase],
    ) -> Self {
        Self {
            objectives: objectives.iter().map(|o| (o.id.as_str(), o)).collect(),
            designs: designs.iter().map(|d| (d.id.as_str(), d)).collect(),
            test_cases: test_cases.iter().map(|t| (t.id.as_str(), t)).collect(),
        }
    }

    /// Resolve one requirement's references against the index
    ///
    /// Resolved entities are cloned into the result in reference-list
    /// order. Dangling ids are skipped without trace.
    #[must_use]
    pub fn impact_of(&self, requirement: &Requirement) -> Impact {
        Impact {
            objectives: requirement
                .objective_ids
                .iter()
                .filter_map(|id| self.objectives.get(id.as_str()).copied().cloned())
                .collect(),
            designs: requirement
                .design_ids
                .iter()
                .filter_map(|id| self.designs.get(id.as_str()).copied().cloned())
                .collect(),
            test_cases: requirement
                .test_case_ids
                .iter()
                .filter_map(|id| self.test_cases.get(id.as_str()).copied().cloned())
                .collect(),
        }
    }
}

/// Resolve one requirement's impact against raw collections
///
/// Convenience wrapper that builds the [`EntityIndex`] for a single
/// resolution. Callers resolving many requirements against the same
/// snapshot should build the index themselves.
#[must_use]
pub fn impact_of(
    requirement: &Requirement,
    objectives: &[Objective],
    designs: &[Design],
    test_cases: &[TestCase],
) -> Impact {
    EntityIndex::new(objectives, designs, test_cases).impact_of(requirement)
}
