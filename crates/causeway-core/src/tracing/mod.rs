//! Tracing initialization and configuration.

pub mod setup;

pub use setup::{init_from_config, init_tracing, init_tracing_with_filter};
