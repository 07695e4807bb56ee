//! Tracematrix Store - Entity collections behind the engine
//!
//! The mutable collaborator the pure engine reads from:
//! - [`MatrixStore`]: thread-safe CRUD over the four entity kinds, with
//!   partial-field merge updates and non-cascading deletes
//! - [`MatrixSnapshot`]: deterministic point-in-time copies for engine calls
//! - Version-counter memoization of the preflight report
//! - [`MatrixStore::export_gated`]: the export safety rail, refusing to
//!   serialize a blocked matrix
//!
//! Deletes never cascade by contract. A requirement referencing a deleted
//! entity keeps the dangling id; the classifier still counts the link, the
//! impact resolver silently omits it, and the graph builder drops the edge.
//!
//! # Example
//!
//! ```rust
//! use tracematrix_store::MatrixStore;
//! use tracematrix_model::{Objective, Requirement};
//!
//! let store = MatrixStore::new();
//! let goal = store.create_objective(Objective::new("Ship v1"));
//! store.create_requirement(
//!     Requirement::new("Login")
//!         .with_objectives([goal.id.as_str()])
//!         .with_acceptance_criteria("must support SSO"),
//! );
//!
//! // Untested requirement: exportable, but flagged.
//! let report = store.report();
//! assert_eq!(report.gaps, 1);
//! assert!(store.export_gated().is_ok());
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use snapshot::MatrixSnapshot;
pub use store::MatrixStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
