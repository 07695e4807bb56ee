//! Testing utilities for the tracematrix workspace
//!
//! Shared fixtures: entities wired into known classification states.

#![allow(missing_docs)]

use tracematrix_model::{Design, Objective, Requirement, TestCase, TestStatus};

pub fn objective(id: &str) -> Objective {
    Objective::new(format!("Objective {id}"))
        .with_id(id)
        .with_owner("product")
}

pub fn design(id: &str) -> Design {
    Design::new(format!("Design {id}"))
        .with_id(id)
        .with_url(format!("https://docs.example/{id}"))
}

pub fn test_case(id: &str) -> TestCase {
    TestCase::new(format!("Test {id}")).with_id(id)
}

pub fn passing_test_case(id: &str) -> TestCase {
    test_case(id).with_status(TestStatus::Pass)
}

/// Requirement with no objectives and no criteria: classifies Invalid,
/// counted as both orphan and incomplete
pub fn invalid_requirement(id: &str) -> Requirement {
    Requirement::new(format!("Requirement {id}")).with_id(id)
}

/// Requirement linked and specified but untested: classifies Gap
pub fn gap_requirement(id: &str, objective_id: &str) -> Requirement {
    Requirement::new(format!("Requirement {id}"))
        .with_id(id)
        .with_objectives([objective_id])
        .with_acceptance_criteria("must support X")
}

/// Fully traced requirement: classifies Valid
pub fn valid_requirement(id: &str, objective_id: &str, test_case_id: &str) -> Requirement {
    gap_requirement(id, objective_id).with_test_cases([test_case_id])
}

/// A small coherent matrix: one objective, one design, one test case and one
/// fully traced requirement linking them
pub fn linked_matrix() -> (Vec<Objective>, Vec<Requirement>, Vec<Design>, Vec<TestCase>) {
    let objectives = vec![objective("O1")];
    let designs = vec![design("D1")];
    let test_cases = vec![passing_test_case("T1")];
    let requirements = vec![valid_requirement("R1", "O1", "T1").with_designs(["D1"])];
    (objectives, requirements, designs, test_cases)
}
