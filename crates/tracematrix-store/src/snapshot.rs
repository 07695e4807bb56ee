//! Point-in-time snapshot of the entity collections
//!
//! The engine only ever sees complete snapshots, never a collection
//! mid-mutation. Entities are sorted by id so two snapshots of the same
//! state compare and serialize identically.

use serde::{Deserialize, Serialize};
use tracematrix_model::{Design, Objective, Requirement, TestCase};

/// Immutable copy of the four entity collections plus the store version
/// that produced it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    /// All objectives, sorted by id
    pub objectives: Vec<Objective>,
    /// All requirements, sorted by id
    pub requirements: Vec<Requirement>,
    /// All designs, sorted by id
    pub designs: Vec<Design>,
    /// All test cases, sorted by id
    pub test_cases: Vec<TestCase>,
    /// Store version counter at capture time
    pub version: u64,
}

impl MatrixSnapshot {
    /// Total entity count across all kinds
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objectives.len() + self.requirements.len() + self.designs.len() + self.test_cases.len()
    }

    /// Whether the matrix holds no entities at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
