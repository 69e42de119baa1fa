//! Stable error codes for callers that dispatch on error kind without matching enums.

/// Every error enum implements this to expose a structured error code string.
pub trait CausewayErrorCode {
    /// Returns the error code string (e.g., "CYCLE_VIOLATION").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_VARIABLE: &str = "UNKNOWN_VARIABLE";
pub const DUPLICATE_VARIABLE: &str = "DUPLICATE_VARIABLE";
pub const CYCLE_VIOLATION: &str = "CYCLE_VIOLATION";
pub const OVERLAPPING_VARIABLE_SETS: &str = "OVERLAPPING_VARIABLE_SETS";
pub const GRAPH_SPEC_ERROR: &str = "GRAPH_SPEC_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
