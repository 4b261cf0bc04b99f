//! Safe RAII wrapper for a Windows process HANDLE
//!
//! Used to re-check liveness right before a row is drawn. The handle is
//! closed when the wrapper goes out of scope.

use windows::Win32::Foundation::{CloseHandle, E_ACCESSDENIED, HANDLE, STILL_ACTIVE};
use windows::Win32::System::Threading::{
    GetExitCodeProcess, OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION,
};

use crate::system::error::{ProcessError, ProcessResult};

/// A safe wrapper around a Windows process HANDLE.
/// Automatically closes the handle when dropped.
pub struct ProcessHandle(HANDLE);

impl ProcessHandle {
    /// Opens a process by PID with limited query rights.
    ///
    /// # Returns
    /// * `Ok(ProcessHandle)` - A wrapped handle to the process
    /// * `Err(AccessDenied)` - The process exists but is protected
    /// * `Err(NotFound)` - The process has exited or never existed
    pub fn open(pid: u32) -> ProcessResult<Self> {
        // SAFETY: OpenProcess is safe to call with any pid; failure is
        // reported through the Result.
        match unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) } {
            Ok(handle) => Ok(Self(handle)),
            Err(e) if e.code() == E_ACCESSDENIED => Err(ProcessError::AccessDenied { pid }),
            Err(_) => Err(ProcessError::NotFound { pid }),
        }
    }

    /// Returns true while the process has not produced an exit code.
    pub fn is_still_active(&self) -> bool {
        let mut exit_code = 0u32;
        // SAFETY: We own a valid handle and pass a valid out pointer.
        let result = unsafe { GetExitCodeProcess(self.0, &mut exit_code) };
        result.is_ok() && exit_code == STILL_ACTIVE.0 as u32
    }

    /// Liveness check used by the process source.
    ///
    /// A protected process that refuses to open is still running.
    pub fn is_running(pid: u32) -> bool {
        match Self::open(pid) {
            Ok(handle) => handle.is_still_active(),
            Err(ProcessError::AccessDenied { .. }) => true,
            Err(ProcessError::NotFound { .. }) => false,
        }
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: We own this handle and it's valid (we got it from OpenProcess).
        // CloseHandle is safe to call on a valid handle exactly once.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}
