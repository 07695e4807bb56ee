//! Preflight aggregation
//!
//! Folds per-requirement verdicts into one report with counts, message
//! lists and a global status. The report gates export: a `Blocked` matrix
//! must not circulate. Recomputation is always full-pass; correctness, not
//! incrementality, is the contract.

use serde::{Deserialize, Serialize};
use tracematrix_model::Requirement;

/// Global health verdict over a requirement set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixStatus {
    /// Every requirement is valid
    Verified,
    /// No blocking defects, but some requirements lack test coverage
    WithGaps,
    /// At least one orphaned or incomplete requirement
    Blocked,
}

impl std::fmt::Display for MatrixStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Verified => "verified",
            Self::WithGaps => "with gaps",
            Self::Blocked => "blocked",
        };
        f.write_str(s)
    }
}

/// Aggregate verifiability report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreflightReport {
    /// Global status, derived from the counters
    pub status: MatrixStatus,
    /// Requirements with no linked objective
    pub orphans: usize,
    /// Requirements with blank acceptance criteria
    pub incomplete: usize,
    /// Requirements that are neither orphaned nor incomplete but untested
    pub gaps: usize,
    /// Requirements that classify as valid
    pub verified_count: usize,
    /// Total requirements examined
    pub total: usize,
    /// One message per orphan/incomplete finding, naming the requirement id
    pub errors: Vec<String>,
    /// One message per gap finding, naming the requirement id
    pub warnings: Vec<String>,
}

impl PreflightReport {
    /// Report over an empty requirement set: verified, all counters zero
    #[must_use]
    pub fn empty() -> Self {
        Self {
            status: MatrixStatus::Verified,
            orphans: 0,
            incomplete: 0,
            gaps: 0,
            verified_count: 0,
            total: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Whether export must be refused
    #[inline]
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status == MatrixStatus::Blocked
    }
}

impl Default for PreflightReport {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute the preflight report for a requirement snapshot
///
/// Single pass. Orphan (no objective) and incomplete (blank criteria) are
/// evaluated independently, so one requirement can contribute to both
/// counters and produce two error messages. Only requirements clean of both
/// are checked for gaps. Status priority:
/// 1. [`MatrixStatus::Blocked`] if any orphan or incomplete finding
/// 2. [`MatrixStatus::WithGaps`] if any gap
/// 3. [`MatrixStatus::Verified`] otherwise
#[must_use]
pub fn compute_report(requirements: &[Requirement]) -> PreflightReport {
    let mut report = PreflightReport::empty();
    report.total = requirements.len();

    for req in requirements {
        let is_orphan = req.objective_ids.is_empty();
        let is_incomplete = req.acceptance_criteria.trim().is_empty();

        if is_orphan {
            report.orphans += 1;
            report
                .errors
                .push(format!("requirement {} has no linked objective", req.id));
        }
        if is_incomplete {
            report.incomplete += 1;
            report
                .errors
                .push(format!("requirement {} has no acceptance criteria", req.id));
        }
        if is_orphan || is_incomplete {
            continue;
        }

        if req.test_case_ids.is_empty() {
            report.gaps += 1;
            report
                .warnings
                .push(format!("requirement {} has no test coverage", req.id));
        } else {
            report.verified_count += 1;
        }
    }

    report.status = if report.orphans > 0 || report.incomplete > 0 {
        MatrixStatus::Blocked
    } else if report.gaps > 0 {
        MatrixStatus::WithGaps
    } else {
        MatrixStatus::Verified
    };

    tracing::debug!(
        total = report.total,
        orphans = report.orphans,
        incomplete = report.incomplete,
        gaps = report.gaps,
        verified = report.verified_count,
        status = %report.status,
        "preflight report computed"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use pretty_assertions::assert_eq;

    fn invalid_req() -> Requirement {
        Requirement::new("r1").with_id("R1")
    }

    fn gap_req() -> Requirement {
        Requirement::new("r2")
            .with_id("R2")
            .with_objectives(["O1"])
            .with_acceptance_criteria("must support X")
    }

    fn valid_req() -> Requirement {
        Requirement::new("r3")
            .with_id("R3")
            .with_objectives(["O1"])
            .with_acceptance_criteria("must support X")
            .with_test_cases(["T1"])
    }

    #[test]
    fn empty_set_is_verified() {
        let report = compute_report(&[]);
        assert_eq!(report, PreflightReport::empty());
    }

    #[test]
    fn one_requirement_can_be_both_orphan_and_incomplete() {
        let report = compute_report(&[invalid_req()]);
        assert_eq!(report.orphans, 1);
        assert_eq!(report.incomplete, 1);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.status, MatrixStatus::Blocked);
    }

    #[test]
    fn mixed_set_matches_expected_counts() {
        let reqs = vec![invalid_req(), gap_req(), valid_req()];
        let report = compute_report(&reqs);

        assert_eq!(report.total, 3);
        assert_eq!(report.orphans, 1);
        assert_eq!(report.incomplete, 1);
        assert_eq!(report.gaps, 1);
        assert_eq!(report.verified_count, 1);
        assert_eq!(report.status, MatrixStatus::Blocked);
    }

    #[test]
    fn gaps_only_yields_with_gaps() {
        let report = compute_report(&[gap_req(), valid_req()]);
        assert_eq!(report.status, MatrixStatus::WithGaps);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn all_valid_yields_verified() {
        let report = compute_report(&[valid_req()]);
        assert_eq!(report.status, MatrixStatus::Verified);
        assert_eq!(report.verified_count, 1);
    }

    #[test]
    fn error_messages_name_the_requirement_id() {
        let report = compute_report(&[invalid_req()]);
        assert!(report.errors.iter().all(|m| m.contains("R1")));
    }

    #[test]
    fn verified_count_agrees_with_classifier() {
        let reqs = vec![invalid_req(), gap_req(), valid_req(), valid_req()];
        let report = compute_report(&reqs);
        let valid = reqs
            .iter()
            .filter(|r| classify(r) == crate::Classification::Valid)
            .count();
        assert_eq!(report.verified_count, valid);
    }
}
