//! Application-wide constants
//!
//! Centralized location for environment variable names and defaults.

// =============================================================================
// Environment variables
// =============================================================================

/// Selects the settings profile (production, development, test)
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Database connection URL
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Lower bound of the connection pool
pub const ENV_MIN_CONNECTIONS: &str = "MIN_CONNECTIONS_COUNT";

/// Upper bound of the connection pool
pub const ENV_MAX_CONNECTIONS: &str = "MAX_CONNECTIONS_COUNT";

/// Connection establishment / pool acquisition timeout in seconds
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "DATABASE_CONNECT_TIMEOUT_SECS";

/// Application secret
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

// =============================================================================
// Database
// =============================================================================

/// Default minimum number of pooled connections
pub const DEFAULT_MIN_CONNECTIONS: u32 = 10;

/// Default maximum number of pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default connect / acquire timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Logging
// =============================================================================

/// Log filter used in production
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter used in development and test
pub const DEBUG_LOG_LEVEL: &str = "debug";
