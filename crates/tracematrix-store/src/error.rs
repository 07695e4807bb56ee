//! Error types for the matrix store
//!
//! Mutations can miss their target; export can be refused while the matrix
//! is blocked. Classification findings themselves are never errors — they
//! live in the preflight report.

use tracematrix_model::EntityKind;

/// Store error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Update or delete targeted an id that is not present
    #[error("{kind} {id} not found")]
    NotFound {
        /// Entity kind of the failed lookup
        kind: EntityKind,
        /// Id that did not resolve
        id: String,
    },

    /// Export refused while the preflight report is blocked
    #[error("export blocked: {orphans} orphaned, {incomplete} incomplete requirement(s)")]
    ExportBlocked {
        /// Requirements with no linked objective
        orphans: usize,
        /// Requirements with blank acceptance criteria
        incomplete: usize,
    },
}

impl StoreError {
    /// Shorthand for a kind-scoped lookup miss
    #[inline]
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
