//! Infrastructure layer constants
//!
//! Domain-level constants live in `ordo_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ordo.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ordo";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ORDO";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "ORDO_LOG";
