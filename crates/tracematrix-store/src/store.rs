//! Thread-safe in-memory entity store
//!
//! One concurrent map per entity kind, a version counter bumped on every
//! committed mutation, and a version-stamped cache of the preflight report.
//! Deletes never cascade: a requirement pointing at a deleted entity keeps
//! its dangling reference, and the engine decides per operation how that is
//! treated.

use crate::error::StoreError;
use crate::snapshot::MatrixSnapshot;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracematrix_engine::{
    build_graph, compute_report, export_csv, EntityIndex, Impact, PreflightReport,
    RequirementFilter, TraceGraph,
};
use tracematrix_model::{
    Design, DesignId, DesignPatch, EntityKind, Objective, ObjectiveId, ObjectivePatch,
    Requirement, RequirementId, RequirementPatch, TestCase, TestCaseId, TestCasePatch,
};

/// In-memory store of the four entity collections
///
/// All reads the engine consumes go through [`MatrixStore::snapshot`]; the
/// preflight report is memoized against the version counter so repeated
/// reads between mutations cost one lock acquisition.
#[derive(Debug, Default)]
pub struct MatrixStore {
    objectives: DashMap<ObjectiveId, Objective>,
    requirements: DashMap<RequirementId, Requirement>,
    designs: DashMap<DesignId, Design>,
    test_cases: DashMap<TestCaseId, TestCase>,
    /// Bumped after every committed mutation
    version: AtomicU64,
    /// Last computed report, stamped with the version it was computed at
    cached_report: Mutex<Option<(u64, PreflightReport)>>,
}

impl MatrixStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version counter
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    fn bump(&self, kind: EntityKind, id: &str, action: &str) -> u64 {
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(%kind, id, action, version, "matrix mutated");
        version
    }

    // ---- objectives ----

    /// Store an objective, returning the stored value
    ///
    /// Ids are generated by the model constructors; storing an entity whose
    /// id is already present replaces it.
    pub fn create_objective(&self, objective: Objective) -> Objective {
        self.objectives.insert(objective.id.clone(), objective.clone());
        self.bump(EntityKind::Objective, objective.id.as_str(), "create");
        objective
    }

    /// Merge a patch onto an objective
    pub fn update_objective(
        &self,
        id: &ObjectiveId,
        patch: ObjectivePatch,
    ) -> Result<Objective, StoreError> {
        let mut entry = self
            .objectives
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Objective, id.as_str()))?;
        patch.apply(&mut entry);
        let updated = entry.clone();
        drop(entry);
        self.bump(EntityKind::Objective, id.as_str(), "update");
        Ok(updated)
    }

    /// Delete an objective; references to it are left dangling
    pub fn delete_objective(&self, id: &ObjectiveId) -> Result<Objective, StoreError> {
        let (_, removed) = self
            .objectives
            .remove(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Objective, id.as_str()))?;
        self.bump(EntityKind::Objective, id.as_str(), "delete");
        Ok(removed)
    }

    /// Fetch an objective by id
    #[must_use]
    pub fn objective(&self, id: &ObjectiveId) -> Option<Objective> {
        self.objectives.get(id).map(|e| e.value().clone())
    }

    // ---- requirements ----

    /// Store a requirement, returning the stored value
    pub fn create_requirement(&self, requirement: Requirement) -> Requirement {
        self.requirements
            .insert(requirement.id.clone(), requirement.clone());
        self.bump(EntityKind::Requirement, requirement.id.as_str(), "create");
        requirement
    }

    /// Merge a patch onto a requirement
    ///
    /// No validation: a patch may blank criteria or point references at ids
    /// that do not exist. The next preflight read reflects the new state.
    pub fn update_requirement(
        &self,
        id: &RequirementId,
        patch: RequirementPatch,
    ) -> Result<Requirement, StoreError> {
        let mut entry = self
            .requirements
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Requirement, id.as_str()))?;
        patch.apply(&mut entry);
        let updated = entry.clone();
        drop(entry);
        self.bump(EntityKind::Requirement, id.as_str(), "update");
        Ok(updated)
    }

    /// Delete a requirement
    pub fn delete_requirement(&self, id: &RequirementId) -> Result<Requirement, StoreError> {
        let (_, removed) = self
            .requirements
            .remove(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Requirement, id.as_str()))?;
        self.bump(EntityKind::Requirement, id.as_str(), "delete");
        Ok(removed)
    }

    /// Fetch a requirement by id
    #[must_use]
    pub fn requirement(&self, id: &RequirementId) -> Option<Requirement> {
        self.requirements.get(id).map(|e| e.value().clone())
    }

    // ---- designs ----

    /// Store a design, returning the stored value
    pub fn create_design(&self, design: Design) -> Design {
        self.designs.insert(design.id.clone(), design.clone());
        self.bump(EntityKind::Design, design.id.as_str(), "create");
        design
    }

    /// Merge a patch onto a design
    pub fn update_design(&self, id: &DesignId, patch: DesignPatch) -> Result<Design, StoreError> {
        let mut entry = self
            .designs
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Design, id.as_str()))?;
        patch.apply(&mut entry);
        let updated = entry.clone();
        drop(entry);
        self.bump(EntityKind::Design, id.as_str(), "update");
        Ok(updated)
    }

    /// Delete a design; references to it are left dangling
    pub fn delete_design(&self, id: &DesignId) -> Result<Design, StoreError> {
        let (_, removed) = self
            .designs
            .remove(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Design, id.as_str()))?;
        self.bump(EntityKind::Design, id.as_str(), "delete");
        Ok(removed)
    }

    /// Fetch a design by id
    #[must_use]
    pub fn design(&self, id: &DesignId) -> Option<Design> {
        self.designs.get(id).map(|e| e.value().clone())
    }

    // ---- test cases ----

    /// Store a test case, returning the stored value
    pub fn create_test_case(&self, test_case: TestCase) -> TestCase {
        self.test_cases
            .insert(test_case.id.clone(), test_case.clone());
        self.bump(EntityKind::TestCase, test_case.id.as_str(), "create");
        test_case
    }

    /// Merge a patch onto a test case
    pub fn update_test_case(
        &self,
        id: &TestCaseId,
        patch: TestCasePatch,
    ) -> Result<TestCase, StoreError> {
        let mut entry = self
            .test_cases
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::TestCase, id.as_str()))?;
        patch.apply(&mut entry);
        let updated = entry.clone();
        drop(entry);
        self.bump(EntityKind::TestCase, id.as_str(), "update");
        Ok(updated)
    }

    /// Delete a test case; references to it are left dangling
    pub fn delete_test_case(&self, id: &TestCaseId) -> Result<TestCase, StoreError> {
        let (_, removed) = self
            .test_cases
            .remove(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::TestCase, id.as_str()))?;
        self.bump(EntityKind::TestCase, id.as_str(), "delete");
        Ok(removed)
    }

    /// Fetch a test case by id
    #[must_use]
    pub fn test_case(&self, id: &TestCaseId) -> Option<TestCase> {
        self.test_cases.get(id).map(|e| e.value().clone())
    }

    // ---- engine reads ----

    /// Capture a complete, deterministic snapshot of all four collections
    #[must_use]
    pub fn snapshot(&self) -> MatrixSnapshot {
        let mut snapshot = MatrixSnapshot {
            objectives: self.objectives.iter().map(|e| e.value().clone()).collect(),
            requirements: self.requirements.iter().map(|e| e.value().clone()).collect(),
            designs: self.designs.iter().map(|e| e.value().clone()).collect(),
            test_cases: self.test_cases.iter().map(|e| e.value().clone()).collect(),
            version: self.version(),
        };
        snapshot.objectives.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.requirements.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.designs.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.test_cases.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot
    }

    /// Current preflight report, memoized against the version counter
    ///
    /// Recomputed in full when any mutation committed since the last read;
    /// otherwise the cached report is returned. An empty store reports
    /// verified with zeroed counters.
    #[must_use]
    pub fn report(&self) -> PreflightReport {
        let version = self.version();
        let mut cache = self.cached_report.lock();
        if let Some((cached_version, report)) = cache.as_ref() {
            if *cached_version == version {
                return report.clone();
            }
        }

        let snapshot = self.snapshot();
        let report = compute_report(&snapshot.requirements);
        tracing::debug!(version, status = %report.status, "preflight report refreshed");
        *cache = Some((version, report.clone()));
        report
    }

    /// One-hop impact of a requirement against the current state
    pub fn impact_of(&self, id: &RequirementId) -> Result<Impact, StoreError> {
        let requirement = self
            .requirement(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Requirement, id.as_str()))?;
        let snapshot = self.snapshot();
        let index = EntityIndex::new(&snapshot.objectives, &snapshot.designs, &snapshot.test_cases);
        Ok(index.impact_of(&requirement))
    }

    /// Trace graph over the current state, optionally filtered
    #[must_use]
    pub fn graph(&self, filter: Option<RequirementFilter<'_>>) -> TraceGraph {
        let snapshot = self.snapshot();
        build_graph(
            &snapshot.objectives,
            &snapshot.requirements,
            &snapshot.designs,
            &snapshot.test_cases,
            filter,
        )
    }

    /// Export the matrix as CSV, refusing while the report is blocked
    ///
    /// The safety rail: a matrix with orphaned or incomplete requirements
    /// must not circulate. The underlying serializer itself is total; only
    /// this gate refuses.
    pub fn export_gated(&self) -> Result<String, StoreError> {
        let report = self.report();
        if report.is_blocked() {
            tracing::warn!(
                orphans = report.orphans,
                incomplete = report.incomplete,
                "export refused on blocked matrix"
            );
            return Err(StoreError::ExportBlocked {
                orphans: report.orphans,
                incomplete: report.incomplete,
            });
        }
        Ok(export_csv(&self.snapshot().requirements))
    }
}
