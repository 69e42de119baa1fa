//! Backdoor and frontdoor criteria, and the identification search.

use causeway_core::config::IdentificationConfig;
use causeway_core::errors::GraphError;
use causeway_graph::identification::*;
use causeway_graph::{CausalGraph, Variable, VariableSet};

fn set(names: &[&str]) -> VariableSet {
    names.iter().map(|n| Variable::from(*n)).collect()
}

fn strings(sets: &[&[&str]]) -> Vec<Vec<String>> {
    sets.iter()
        .map(|s| s.iter().map(|n| n.to_string()).collect())
        .collect()
}

/// C → X, C → Y, X → Y
fn confounded() -> CausalGraph {
    CausalGraph::from_edges(["C", "X", "Y"], [("C", "X"), ("C", "Y"), ("X", "Y")]).unwrap()
}

/// U → X, U → Y, X → M → Y with U unobserved.
fn smoking() -> CausalGraph {
    CausalGraph::from_edges(
        ["U", "X", "M", "Y"],
        [("U", "X"), ("U", "Y"), ("X", "M"), ("M", "Y")],
    )
    .unwrap()
    .with_latent(["U"])
    .unwrap()
}

// --- Backdoor criterion ---

#[test]
fn confounder_must_be_adjusted_for() {
    let g = confounded();
    assert!(backdoor_criterion(&g, &["X"], &["Y"], &["C"]).unwrap());
    assert!(!backdoor_criterion(&g, &["X"], &["Y"], &[]).unwrap());
}

#[test]
fn descendants_of_treatment_are_never_valid() {
    let g = CausalGraph::from_edges(["X", "M", "Y"], [("X", "M"), ("M", "Y")]).unwrap();
    assert!(backdoor_criterion(&g, &["X"], &["Y"], &[]).unwrap());
    assert!(!backdoor_criterion(&g, &["X"], &["Y"], &["M"]).unwrap());
}

#[test]
fn adjusting_for_a_collider_opens_a_backdoor_path() {
    // A → X, A → M ← B, B → Y, X → Y
    let g = CausalGraph::from_edges(
        ["A", "B", "M", "X", "Y"],
        [("A", "X"), ("A", "M"), ("B", "M"), ("B", "Y"), ("X", "Y")],
    )
    .unwrap();
    assert!(backdoor_criterion(&g, &["X"], &["Y"], &[]).unwrap());
    assert!(!backdoor_criterion(&g, &["X"], &["Y"], &["M"]).unwrap());
    assert!(backdoor_criterion(&g, &["X"], &["Y"], &["M", "A"]).unwrap());
}

#[test]
fn backdoor_rejects_overlap_and_unknown_names() {
    let g = confounded();
    assert!(matches!(
        backdoor_criterion(&g, &["X"], &["Y"], &["X"]),
        Err(GraphError::OverlappingVariableSets { .. })
    ));
    assert!(matches!(
        backdoor_criterion(&g, &["X"], &["Y"], &["Q"]),
        Err(GraphError::UnknownVariable { .. })
    ));
}

// --- Frontdoor criterion ---

#[test]
fn unconfounded_mediator_satisfies_frontdoor() {
    let g = CausalGraph::from_edges(["X", "M", "Y"], [("X", "M"), ("M", "Y")]).unwrap();
    assert!(frontdoor_criterion(&g, &["X"], &["Y"], &["M"]).unwrap());
}

#[test]
fn frontdoor_holds_under_latent_confounding() {
    let g = smoking();
    assert!(frontdoor_criterion(&g, &["X"], &["Y"], &["M"]).unwrap());
    assert!(!backdoor_criterion(&g, &["X"], &["Y"], &[]).unwrap());
}

#[test]
fn frontdoor_fails_when_a_path_bypasses_the_mediator() {
    let g = CausalGraph::from_edges(["X", "M", "Y"], [("X", "M"), ("M", "Y"), ("X", "Y")]).unwrap();
    assert!(!frontdoor_criterion(&g, &["X"], &["Y"], &["M"]).unwrap());
}

#[test]
fn frontdoor_fails_when_treatment_and_mediator_are_confounded() {
    let g = CausalGraph::from_edges(
        ["U", "X", "M", "Y"],
        [("U", "X"), ("U", "M"), ("X", "M"), ("M", "Y")],
    )
    .unwrap();
    assert!(!frontdoor_criterion(&g, &["X"], &["Y"], &["M"]).unwrap());
}

#[test]
fn frontdoor_fails_when_treatment_cannot_block_mediator_outcome_confounding() {
    // W confounds M and Y; conditioning on X does not help.
    let g = CausalGraph::from_edges(
        ["X", "M", "W", "Y"],
        [("X", "M"), ("M", "Y"), ("W", "M"), ("W", "Y")],
    )
    .unwrap();
    assert!(!frontdoor_criterion(&g, &["X"], &["Y"], &["M"]).unwrap());
}

// --- identify_effect ---

#[test]
fn direct_edge_is_identified_with_empty_adjustment() {
    let g = CausalGraph::from_edges(["X", "Y"], [("X", "Y")]).unwrap();
    let result = identify_effect(&g, &["X"], &["Y"], &CandidateSource::bounded(3)).unwrap();
    assert_eq!(
        result,
        IdentificationResult::Backdoor {
            treatment: set(&["X"]),
            outcome: set(&["Y"]),
            adjustment_set: VariableSet::new(),
        }
    );
    assert_eq!(result.to_string(), "P(Y | do(X)) = P(Y | X)");
}

#[test]
fn confounded_effect_adjusts_for_confounder() {
    let result =
        identify_effect(&confounded(), &["X"], &["Y"], &CandidateSource::bounded(3)).unwrap();
    assert!(result.is_identified());
    assert_eq!(result.method(), "backdoor");
    assert_eq!(result.adjustment_set(), Some(&set(&["C"])));
    assert_eq!(result.to_string(), "P(Y | do(X)) = Σ_{C} P(Y | X, C) P(C)");
}

#[test]
fn latent_confounding_falls_back_to_frontdoor() {
    let result = identify_effect(&smoking(), &["X"], &["Y"], &CandidateSource::bounded(3)).unwrap();
    assert_eq!(result.method(), "frontdoor");
    assert_eq!(result.mediator_set(), Some(&set(&["M"])));
    assert_eq!(result.adjustment_set(), None);
    assert_eq!(
        result.to_string(),
        "P(Y | do(X)) = Σ_{M} P(M | X) Σ_{X'} P(Y | X', M) P(X')"
    );
}

#[test]
fn latent_confounding_without_mediator_is_unidentifiable() {
    let g = CausalGraph::from_edges(["U", "X", "Y"], [("U", "X"), ("U", "Y"), ("X", "Y")])
        .unwrap()
        .with_latent(["U"])
        .unwrap();
    let result = identify_effect(&g, &["X"], &["Y"], &CandidateSource::bounded(3)).unwrap();
    assert_eq!(
        result,
        IdentificationResult::Unidentifiable {
            treatment: set(&["X"]),
            outcome: set(&["Y"]),
        }
    );
    assert!(!result.is_identified());
    assert_eq!(
        result.to_string(),
        "P(Y | do(X)) is not identifiable by backdoor or frontdoor adjustment"
    );
}

#[test]
fn disabling_frontdoor_leaves_smoking_unidentifiable() {
    let config = IdentificationConfig {
        try_frontdoor: false,
        ..IdentificationConfig::default()
    };
    let result = identify_effect_with(
        &smoking(),
        &["X"],
        &["Y"],
        &CandidateSource::bounded(3),
        &config,
    )
    .unwrap();
    assert_eq!(result.method(), "unidentifiable");
}

#[test]
fn size_bound_limits_the_search() {
    // Two confounders must both be adjusted for.
    let g = CausalGraph::from_edges(
        ["C1", "C2", "X", "Y"],
        [("C1", "X"), ("C1", "Y"), ("C2", "X"), ("C2", "Y"), ("X", "Y")],
    )
    .unwrap();
    let small = identify_effect(&g, &["X"], &["Y"], &CandidateSource::bounded(1)).unwrap();
    assert!(!small.is_identified());

    let enough = identify_effect(&g, &["X"], &["Y"], &CandidateSource::bounded(2)).unwrap();
    assert_eq!(enough.adjustment_set(), Some(&set(&["C1", "C2"])));

    let unbounded = identify_effect(&g, &["X"], &["Y"], &CandidateSource::unbounded()).unwrap();
    assert_eq!(unbounded, enough);
}

#[test]
fn zero_bound_only_tries_the_empty_set() {
    let result = identify_effect(&confounded(), &["X"], &["Y"], &CandidateSource::bounded(0)).unwrap();
    assert!(!result.is_identified());
}

/// C → X, C → D → Y, X → Y: both {C} and {D} are valid.
fn two_valid_singletons() -> CausalGraph {
    CausalGraph::from_edges(
        ["C", "D", "X", "Y"],
        [("C", "X"), ("C", "D"), ("D", "Y"), ("X", "Y")],
    )
    .unwrap()
}

#[test]
fn ties_are_broken_by_declaration_order() {
    let g = two_valid_singletons();
    assert!(backdoor_criterion(&g, &["X"], &["Y"], &["D"]).unwrap());
    let result = identify_effect(&g, &["X"], &["Y"], &CandidateSource::bounded(2)).unwrap();
    assert_eq!(result.adjustment_set(), Some(&set(&["C"])));
}

#[test]
fn parallel_search_returns_the_serial_answer() {
    let g = two_valid_singletons();
    let parallel = IdentificationConfig {
        parallel_search: true,
        parallel_threshold: 1,
        ..IdentificationConfig::default()
    };
    let serial = IdentificationConfig {
        parallel_search: false,
        ..IdentificationConfig::default()
    };
    let source = CandidateSource::bounded(2);
    for _ in 0..20 {
        assert_eq!(
            identify_effect_with(&g, &["X"], &["Y"], &source, &parallel).unwrap(),
            identify_effect_with(&g, &["X"], &["Y"], &source, &serial).unwrap()
        );
    }
}

#[test]
fn multiple_treatments() {
    let g = CausalGraph::from_edges(
        ["C", "X1", "X2", "Y"],
        [("C", "X1"), ("C", "Y"), ("X1", "Y"), ("X2", "Y")],
    )
    .unwrap();
    let result = identify_effect(&g, &["X1", "X2"], &["Y"], &CandidateSource::bounded(2)).unwrap();
    assert_eq!(result.adjustment_set(), Some(&set(&["C"])));
    assert_eq!(
        result.to_string(),
        "P(Y | do(X1, X2)) = Σ_{C} P(Y | X1, X2, C) P(C)"
    );
}

#[test]
fn overlapping_treatment_and_outcome_is_an_error() {
    assert!(matches!(
        identify_effect(&confounded(), &["X"], &["X"], &CandidateSource::bounded(1)),
        Err(GraphError::OverlappingVariableSets { .. })
    ));
}

// --- Explicit candidates ---

#[test]
fn explicit_candidates_are_tried_smallest_first() {
    let g = two_valid_singletons();
    let source = CandidateSource::explicit(strings(&[&["C", "D"], &["D"]]), vec![]);
    let result = identify_effect(&g, &["X"], &["Y"], &source).unwrap();
    assert_eq!(result.adjustment_set(), Some(&set(&["D"])));
}

#[test]
fn explicit_empty_set_is_allowed() {
    let g = CausalGraph::from_edges(["X", "Y"], [("X", "Y")]).unwrap();
    let source = CandidateSource::explicit(vec![vec![]], vec![]);
    let result = identify_effect(&g, &["X"], &["Y"], &source).unwrap();
    assert_eq!(result.adjustment_set(), Some(&VariableSet::new()));
}

#[test]
fn explicit_candidates_overlapping_treatment_are_skipped() {
    let source = CandidateSource::explicit(strings(&[&["X"]]), vec![]);
    let result = identify_effect(&confounded(), &["X"], &["Y"], &source).unwrap();
    assert!(!result.is_identified());
}

#[test]
fn explicit_candidates_with_latent_variables_are_skipped() {
    let source = CandidateSource::explicit(strings(&[&["U"]]), strings(&[&["M"]]));
    let result = identify_effect(&smoking(), &["X"], &["Y"], &source).unwrap();
    assert_eq!(result.mediator_set(), Some(&set(&["M"])));
}

#[test]
fn explicit_candidates_with_unknown_names_are_errors() {
    let source = CandidateSource::explicit(strings(&[&["Nope"]]), vec![]);
    assert_eq!(
        identify_effect(&confounded(), &["X"], &["Y"], &source).unwrap_err(),
        GraphError::UnknownVariable {
            name: "Nope".into()
        }
    );
}

// --- Serialization ---

#[test]
fn result_serializes_with_kind_tag() {
    let result =
        identify_effect(&confounded(), &["X"], &["Y"], &CandidateSource::bounded(3)).unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "kind": "backdoor",
            "treatment": ["X"],
            "outcome": ["Y"],
            "adjustment_set": ["C"]
        })
    );
}

#[test]
fn size_bound_from_config_limit() {
    assert_eq!(SizeBound::from_limit(Some(2)), SizeBound::AtMost(2));
    assert_eq!(SizeBound::from_limit(None), SizeBound::Unbounded);

    let config = IdentificationConfig {
        allow_unbounded: true,
        ..IdentificationConfig::default()
    };
    assert_eq!(
        CandidateSource::from_config(&config),
        CandidateSource::Enumerate {
            adjustment: SizeBound::Unbounded,
            mediators: SizeBound::AtMost(2),
        }
    );
}
