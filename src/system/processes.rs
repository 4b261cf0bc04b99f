//! Process enumeration
//!
//! The viewer consumes processes through the [`ProcessSource`] trait so the
//! views never talk to the operating system directly. [`SysinfoSource`] is
//! the live implementation; tests substitute an in-memory source.

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

use super::error::{ProcessError, ProcessResult};

/// Read-only snapshot of a single process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    /// Process ID
    pub pid: u32,
    /// Parent process ID, if the OS reports one
    pub parent_pid: Option<u32>,
    /// Executable name (e.g., "bash")
    pub name: String,
    /// Command line split into arguments
    pub command_line: Vec<String>,
}

impl ProcessRecord {
    /// Command line joined with single spaces, the form search matches against.
    pub fn joined_command_line(&self) -> String {
        self.command_line.join(" ")
    }
}

/// Source of process information.
///
/// Every method may observe a process that vanished since the last call;
/// implementations report that as [`ProcessError::NotFound`] or `false`.
pub trait ProcessSource {
    /// Lists the pids currently present, in ascending order.
    fn list_pids(&mut self) -> Vec<u32>;

    /// Reads one process.
    fn open(&mut self, pid: u32) -> ProcessResult<ProcessRecord>;

    /// Re-checks whether a process is still alive.
    fn is_running(&mut self, pid: u32) -> bool;
}

/// Takes a fresh snapshot of every process that can still be opened.
///
/// Processes that exit between enumeration and query are dropped.
pub fn snapshot(source: &mut dyn ProcessSource) -> Vec<ProcessRecord> {
    let pids = source.list_pids();
    let mut processes = Vec::with_capacity(pids.len());

    for pid in pids {
        match source.open(pid) {
            Ok(record) => processes.push(record),
            Err(e) if e.is_not_found() => {
                tracing::debug!(pid, "process vanished during snapshot");
            }
            Err(e) => {
                tracing::debug!(pid, error = %e, "skipping unreadable process");
            }
        }
    }

    processes
}

/// Live process source backed by `sysinfo`.
pub struct SysinfoSource {
    system: System,
}

impl SysinfoSource {
    /// Creates a source with an empty process table; the first
    /// [`ProcessSource::list_pids`] call populates it.
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    fn refresh_kind() -> ProcessRefreshKind {
        ProcessRefreshKind::nothing().with_cmd(UpdateKind::Always)
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSource for SysinfoSource {
    fn list_pids(&mut self) -> Vec<u32> {
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, true, Self::refresh_kind());

        // Linux lists each thread of a process as a task of its own
        let mut pids: Vec<u32> = self
            .system
            .processes()
            .iter()
            .filter(|(_, process)| process.thread_kind().is_none())
            .map(|(pid, _)| pid.as_u32())
            .collect();
        pids.sort_unstable();
        pids
    }

    fn open(&mut self, pid: u32) -> ProcessResult<ProcessRecord> {
        let process = self
            .system
            .process(Pid::from_u32(pid))
            .ok_or(ProcessError::NotFound { pid })?;

        Ok(ProcessRecord {
            pid,
            parent_pid: process.parent().map(|p| p.as_u32()),
            name: process.name().to_string_lossy().into_owned(),
            command_line: process
                .cmd()
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        })
    }

    #[cfg(windows)]
    fn is_running(&mut self, pid: u32) -> bool {
        crate::ffi::ProcessHandle::is_running(pid)
    }

    #[cfg(not(windows))]
    fn is_running(&mut self, pid: u32) -> bool {
        use sysinfo::ProcessStatus;

        let target = Pid::from_u32(pid);
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[target]),
            true,
            ProcessRefreshKind::nothing(),
        );

        self.system
            .process(target)
            .is_some_and(|p| !matches!(p.status(), ProcessStatus::Zombie | ProcessStatus::Dead))
    }
}
