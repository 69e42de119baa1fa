//! Reachability kernel: ancestor, descendant, blanket, and subgraph queries.
//!
//! Every traversal is an explicit worklist with a visited set local to the
//! call, so each query is O(n + |E|) and safe to run from many threads on
//! the same graph.

pub mod ancestry;
pub mod blanket;
pub mod subgraph;
pub mod topological;

pub use ancestry::{ancestors, descendants, has_directed_path, mediators};
pub use blanket::markov_blanket;
pub use subgraph::ancestral_subgraph;
pub use topological::topological_order;
