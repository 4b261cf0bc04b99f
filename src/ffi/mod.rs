//! FFI module - Safe wrappers around Win32 handles
//!
//! Only compiled on Windows, where process liveness is read straight from
//! a process handle instead of refreshing the whole `sysinfo` table.

mod handles;

pub use handles::ProcessHandle;
