//! Graph store: variable arena, acyclic edge relation, and loading.

pub mod dag_enforcement;
pub mod loader;
pub mod stable_graph;

pub use loader::GraphSpec;
pub use stable_graph::{CausalGraph, Variable, VariableSet};
