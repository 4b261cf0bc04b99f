//! Centralized constants for the application

// ============================================================================
// Application Info
// ============================================================================

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Files
// ============================================================================

/// Directory under `~/.config` and the local data dir
pub const CONFIG_DIR_NAME: &str = "pmn";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Never rotated
pub const LOG_FILE_NAME: &str = "pmn.log";

/// Overrides every other log level setting
pub const LOG_ENV_VAR: &str = "PMN_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Columns
// ============================================================================

/// Minimum width of the pid column
pub const DEFAULT_PID_WIDTH: usize = 4;

/// Minimum width of the process name column
pub const DEFAULT_NAME_WIDTH: usize = 14;
