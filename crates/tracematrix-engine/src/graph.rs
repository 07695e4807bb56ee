//! Dependency graph construction
//!
//! Builds the logical node/edge structure of the traceability graph for an
//! external visualization collaborator. The contract ends at the lists:
//! layout, physics, drag and zoom are not this crate's concern. The output
//! is serde-serializable so it can cross the boundary as JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracematrix_model::{Design, Objective, Requirement, TestCase, TestStatus};

/// Kind tag on a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Upstream objective
    Objective,
    /// Requirement
    Requirement,
    /// Downstream design artifact
    Design,
    /// Downstream test case
    TestCase,
}

/// One node of the trace graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Entity id, used as the edge endpoint key
    pub id: String,
    /// Display label (entity title)
    pub label: String,
    /// Kind tag, used by the renderer for styling
    pub kind: NodeKind,
    /// Execution status for test case nodes, `None` for other kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_status: Option<TestStatus>,
}

/// One directed edge of the trace graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node id
    pub source: String,
    /// Target node id
    pub target: String,
}

/// Node and edge lists handed to the rendering collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceGraph {
    /// Deduplicated nodes, one per distinct entity id
    pub nodes: Vec<GraphNode>,
    /// Edges whose endpoints are both realized nodes
    pub edges: Vec<GraphEdge>,
}

impl TraceGraph {
    /// Serialize for the visualization collaborator
    ///
    /// The graph is plain data; serialization cannot fail.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{\"nodes\":[],\"edges\":[]}"))
    }
}

/// Optional requirement filter: only requirements it accepts become nodes
pub type RequirementFilter<'a> = &'a dyn Fn(&Requirement) -> bool;

/// Build the trace graph for a snapshot
///
/// Nodes: every objective, design and test case unconditionally; every
/// requirement accepted by `filter` (all of them when `None`). Nodes are
/// deduplicated by id string across the combined set, first occurrence
/// wins.
///
/// Edges, only from requirement nodes that were actually realized:
/// `objective -> requirement`, `requirement -> design`,
/// `requirement -> test case`, in reference-list order. An edge is emitted
/// only when both endpoints are realized nodes; a reference to a missing or
/// filtered-out entity drops the edge silently. Note the asymmetry with the
/// classifier, which treats list emptiness as a defect but never checks
/// resolution: a requirement can classify as valid yet lose edges here.
/// That mismatch is observed product behavior and is preserved as is.
#[must_use]
pub fn build_graph(
    objectives: &[Objective],
    requirements: &[Requirement],
    designs: &[Design],
    test_cases: &[TestCase],
    filter: Option<RequirementFilter<'_>>,
) -> TraceGraph {
    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut realized: HashSet<String> = HashSet::new();

    fn push_node(
        nodes: &mut Vec<GraphNode>,
        realized: &mut HashSet<String>,
        node: GraphNode,
    ) -> bool {
        if realized.insert(node.id.clone()) {
            nodes.push(node);
            true
        } else {
            false
        }
    }

    for objective in objectives {
        push_node(
            &mut nodes,
            &mut realized,
            GraphNode {
                id: objective.id.to_string(),
                label: objective.title.clone(),
                kind: NodeKind::Objective,
                test_status: None,
            },
        );
    }
    for design in designs {
        push_node(
            &mut nodes,
            &mut realized,
            GraphNode {
                id: design.id.to_string(),
                label: design.title.clone(),
                kind: NodeKind::Design,
                test_status: None,
            },
        );
    }
    for test_case in test_cases {
        push_node(
            &mut nodes,
            &mut realized,
            GraphNode {
                id: test_case.id.to_string(),
                label: test_case.title.clone(),
                kind: NodeKind::TestCase,
                test_status: Some(test_case.status),
            },
        );
    }

    // Requirements last; only the ones whose node actually landed may
    // contribute edges.
    let mut edge_sources: Vec<&Requirement> = Vec::new();
    for requirement in requirements {
        if let Some(accept) = filter {
            if !accept(requirement) {
                continue;
            }
        }
        let added = push_node(
            &mut nodes,
            &mut realized,
            GraphNode {
                id: requirement.id.to_string(),
                label: requirement.title.clone(),
                kind: NodeKind::Requirement,
                test_status: None,
            },
        );
        if added {
            edge_sources.push(requirement);
        }
    }

    let mut edges: Vec<GraphEdge> = Vec::new();
    for requirement in edge_sources {
        let req_id = requirement.id.as_str();
        for objective_id in &requirement.objective_ids {
            if realized.contains(objective_id.as_str()) {
                edges.push(GraphEdge {
                    source: objective_id.to_string(),
                    target: req_id.to_string(),
                });
            }
        }
        for design_id in &requirement.design_ids {
            if realized.contains(design_id.as_str()) {
                edges.push(GraphEdge {
                    source: req_id.to_string(),
                    target: design_id.to_string(),
                });
            }
        }
        for test_case_id in &requirement.test_case_ids {
            if realized.contains(test_case_id.as_str()) {
                edges.push(GraphEdge {
                    source: req_id.to_string(),
                    target: test_case_id.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        filtered = filter.is_some(),
        "trace graph built"
    );

    TraceGraph { nodes, edges }
}
