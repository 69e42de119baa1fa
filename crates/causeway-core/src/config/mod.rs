//! Configuration system for Causeway.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod causeway_config;
pub mod defaults;
pub mod identification_config;
pub mod observability_config;

pub use causeway_config::CausewayConfig;
pub use identification_config::IdentificationConfig;
pub use observability_config::ObservabilityConfig;
