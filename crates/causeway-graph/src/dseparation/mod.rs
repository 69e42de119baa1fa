//! D-separation by moralization of the ancestral subgraph.
//!
//! 1. Restrict to `X ∪ Y ∪ Z` and their ancestors.
//! 2. Marry every pair of parents that share a child, then drop directions.
//! 3. `X ⊥ Y | Z` iff removing `Z` disconnects `X` from `Y` in that moral graph.
//!
//! Step 2 is what makes colliders work: in `A -> C <- B` the parents `A`
//! and `B` are only married when `C` (or a descendant of `C`) is part of the
//! ancestral set, i.e. when something at or below the collider is conditioned on.

pub mod markov;
pub mod moral;
pub mod separation;

pub use markov::{local_markov_statements, Independence};
pub use moral::{moralize, MoralGraph};
pub use separation::{d_connected, d_separated};
