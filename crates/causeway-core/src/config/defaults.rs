// Single source of truth for all default values.

// --- Identification ---
pub const DEFAULT_MAX_ADJUSTMENT_SIZE: usize = 3;
pub const DEFAULT_ALLOW_UNBOUNDED: bool = false;
pub const DEFAULT_TRY_FRONTDOOR: bool = true;
pub const DEFAULT_MAX_MEDIATOR_SIZE: usize = 2;
pub const DEFAULT_PARALLEL_SEARCH: bool = true;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
