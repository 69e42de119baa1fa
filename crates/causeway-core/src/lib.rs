//! # causeway-core
//!
//! Foundation crate for the Causeway identification engine.
//! Defines errors, error codes, configuration, defaults, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::CausewayConfig;
pub use errors::{CausewayError, CausewayResult, ConfigError, GraphError, GraphResult};
