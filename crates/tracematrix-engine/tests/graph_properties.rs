use proptest::prelude::*;
use std::collections::HashSet;
use tracematrix_engine::{build_graph, impact_of};
use tracematrix_model::{Design, Objective, Requirement, TestCase};

/// Pool of ids, only some of which resolve: indexes into the live pool
/// stay realized, the rest dangle.
fn arb_reference(live: usize) -> impl Strategy<Value = String> {
    prop_oneof![
        (0..live).prop_map(|i| format!("E{i}")),
        "dangling-[a-z]{1,6}",
    ]
}

fn arb_requirement(live: usize) -> impl Strategy<Value = Requirement> {
    (
        proptest::collection::vec(arb_reference(live), 0..4),
        proptest::collection::vec(arb_reference(live), 0..4),
        proptest::collection::vec(arb_reference(live), 0..4),
    )
        .prop_map(|(objectives, designs, tests)| {
            Requirement::new("generated")
                .with_objectives(objectives.iter().map(String::as_str))
                .with_designs(designs.iter().map(String::as_str))
                .with_test_cases(tests.iter().map(String::as_str))
        })
}

proptest! {
    #[test]
    fn prop_no_dangling_edge_ever_escapes(
        live in 1..6usize,
        reqs in proptest::collection::vec(arb_requirement(6), 0..8),
    ) {
        let objectives: Vec<Objective> =
            (0..live).map(|i| Objective::new("o").with_id(format!("E{i}").as_str())).collect();
        let designs: Vec<Design> =
            (0..live).map(|i| Design::new("d").with_id(format!("E{i}").as_str())).collect();
        let test_cases: Vec<TestCase> =
            (0..live).map(|i| TestCase::new("t").with_id(format!("E{i}").as_str())).collect();

        let graph = build_graph(&objectives, &reqs, &designs, &test_cases, None);

        let node_ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &graph.edges {
            prop_assert!(node_ids.contains(edge.source.as_str()));
            prop_assert!(node_ids.contains(edge.target.as_str()));
        }
    }

    #[test]
    fn prop_nodes_are_unique_by_id(
        live in 1..6usize,
        reqs in proptest::collection::vec(arb_requirement(6), 0..8),
    ) {
        let objectives: Vec<Objective> =
            (0..live).map(|i| Objective::new("o").with_id(format!("E{i}").as_str())).collect();

        let graph = build_graph(&objectives, &reqs, &[], &[], None);

        let mut seen = HashSet::new();
        for node in &graph.nodes {
            prop_assert!(seen.insert(node.id.clone()), "duplicate node id {}", node.id);
        }
    }

    #[test]
    fn prop_impact_is_total_and_resolution_bounded(req in arb_requirement(6)) {
        let objectives: Vec<Objective> =
            (0..6).map(|i| Objective::new("o").with_id(format!("E{i}").as_str())).collect();

        let impact = impact_of(&req, &objectives, &[], &[]);
        // Never more resolutions than references; dangling ids vanish.
        prop_assert!(impact.objectives.len() <= req.objective_ids.len());
        prop_assert!(impact.designs.is_empty());
        prop_assert!(impact.test_cases.is_empty());
    }
}
