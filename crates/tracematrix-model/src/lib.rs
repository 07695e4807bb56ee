//! Tracematrix Model - Entity data model for the traceability matrix
//!
//! Defines the four entity kinds of the requirements-traceability graph:
//! - [`Objective`]: strategic goals (upstream, terminal)
//! - [`Requirement`]: the only entity with outgoing references
//! - [`Design`] / [`TestCase`]: downstream deliverables (terminal)
//!
//! plus kind-scoped id newtypes, partial-update patches, and the
//! [`EditTarget`] union for form state.
//!
//! The model is deliberately permissive: reference lists are ordered,
//! unchecked and allowed to dangle. The engine crate classifies and reports
//! over these values; it never repairs them.

#![warn(unreachable_pub)]

pub mod edit;
pub mod entities;
pub mod id;
pub mod patch;

pub use edit::EditTarget;
pub use entities::{
    Design, DesignStatus, Objective, ObjectiveStatus, Priority, Requirement, RequirementStatus,
    TestCase, TestStatus,
};
pub use id::{DesignId, EntityKind, ObjectiveId, RequirementId, TestCaseId};
pub use patch::{DesignPatch, ObjectivePatch, RequirementPatch, TestCasePatch};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the traceability model
    pub use crate::{
        Design, DesignId, EntityKind, Objective, ObjectiveId, Requirement, RequirementId,
        TestCase, TestCaseId, TestStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
