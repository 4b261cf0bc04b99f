//! Error types for process queries
//!
//! Process disappearance is the normal case here: a pid listed a moment
//! ago may be gone by the time it is opened. Callers filter these out of
//! the snapshot instead of surfacing them.

use thiserror::Error;

/// Errors that can occur while reading a process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// Process does not exist or has already terminated
    #[error("process {pid} not found or has terminated")]
    NotFound {
        /// Process identifier that was requested
        pid: u32,
    },

    /// The process exists but its attributes cannot be read
    #[error("access denied reading process {pid}")]
    #[cfg_attr(not(windows), allow(dead_code))]
    AccessDenied {
        /// Process identifier that was requested
        pid: u32,
    },
}

impl ProcessError {
    /// Returns true if the process vanished between enumeration and query.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProcessError::NotFound { .. })
    }
}

/// Result type for process operations
pub type ProcessResult<T> = Result<T, ProcessError>;
