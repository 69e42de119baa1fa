//! # causeway-graph
//!
//! The identification engine. Holds a causal DAG over named variables and
//! answers d-separation queries, backdoor/frontdoor identification, and
//! do-operator graph mutilation.
//!
//! Components build strictly upward: graph store → reachability →
//! d-separation → identification → intervention. Every query takes the
//! graph by shared reference and never mutates it.

pub mod dseparation;
pub mod engine;
pub mod graph;
pub mod identification;
pub mod intervention;
pub mod reachability;

pub use dseparation::{d_connected, d_separated, local_markov_statements, Independence};
pub use engine::CausalEngine;
pub use graph::{CausalGraph, GraphSpec, Variable, VariableSet};
pub use identification::{
    backdoor_criterion, frontdoor_criterion, identify_effect, identify_effect_with,
    CandidateSource, IdentificationResult, SizeBound,
};
pub use intervention::{find_adjustment_set, intervene, MutilatedGraph};
pub use reachability::{
    ancestors, ancestral_subgraph, descendants, has_directed_path, markov_blanket, mediators,
    topological_order,
};
