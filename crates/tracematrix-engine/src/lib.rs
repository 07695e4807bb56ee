//! Tracematrix Engine - Traceability validation and impact analysis
//!
//! The pure core of the traceability matrix:
//! - Classifies requirements ([`classify`]) into `Invalid`/`Gap`/`Valid`
//! - Aggregates a verifiability report ([`compute_report`])
//! - Resolves one-hop impact for a requirement ([`impact_of`])
//! - Builds the node/edge trace graph ([`build_graph`])
//! - Serializes the matrix to CSV ([`export_csv`])
//!
//! Every operation is a total, synchronous function over an immutable
//! snapshot of the entity collections: no internal state, no I/O, nothing
//! to lock. Callers re-invoke after each committed mutation; all functions
//! are re-entrant against a shared snapshot.
//!
//! Dangling references never raise errors here. The classifier and impact
//! resolver ignore resolution entirely, while the graph builder silently
//! drops unresolved edges; the asymmetry is observed product behavior,
//! documented on the functions involved.
//!
//! # Example
//!
//! ```rust
//! use tracematrix_engine::{classify, compute_report, Classification, MatrixStatus};
//! use tracematrix_model::Requirement;
//!
//! let req = Requirement::new("Login")
//!     .with_objectives(["O1"])
//!     .with_acceptance_criteria("must support SSO");
//!
//! assert_eq!(classify(&req), Classification::Gap);
//! assert_eq!(compute_report(&[req]).status, MatrixStatus::WithGaps);
//! ```

#![warn(unreachable_pub)]

pub mod classify;
pub mod export;
pub mod graph;
pub mod impact;
pub mod preflight;

pub use classify::{classify, Classification};
pub use export::{export_csv, BOM};
pub use graph::{build_graph, GraphEdge, GraphNode, NodeKind, RequirementFilter, TraceGraph};
pub use impact::{impact_of, EntityIndex, Impact};
pub use preflight::{compute_report, MatrixStatus, PreflightReport};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the engine
    pub use crate::{
        build_graph, classify, compute_report, export_csv, impact_of, Classification, Impact,
        MatrixStatus, PreflightReport, TraceGraph,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
