//! Error handling for Causeway.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod graph_error;

pub use config_error::ConfigError;
pub use error_code::CausewayErrorCode;
pub use graph_error::{GraphError, GraphResult};

/// Umbrella error for callers that mix graph operations with config loading.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CausewayErrorCode for CausewayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type CausewayResult<T> = Result<T, CausewayError>;
