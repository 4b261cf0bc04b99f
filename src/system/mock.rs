//! In-memory process source for tests.
//!
//! ```ignore
//! let mut source = MockSource::new()
//!     .with_process(1, None, "init", &["/sbin/init"])
//!     .with_process(42, Some(1), "bash", &["bash"])
//!     .exited(42);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use super::error::{ProcessError, ProcessResult};
use super::processes::{ProcessRecord, ProcessSource};

/// Scripted process table.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    processes: BTreeMap<u32, ProcessRecord>,
    /// Listed by `list_pids` but fail to open
    vanished: BTreeSet<u32>,
    /// Open fine but report not running
    exited: BTreeSet<u32>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_process(
        mut self,
        pid: u32,
        parent_pid: Option<u32>,
        name: &str,
        command_line: &[&str],
    ) -> Self {
        self.insert(pid, parent_pid, name, command_line);
        self
    }

    /// Adds `count` processes with pids starting at `first_pid`, all
    /// children of `parent_pid`, named `proc<pid>`.
    pub fn with_many(mut self, first_pid: u32, count: u32, parent_pid: Option<u32>) -> Self {
        for pid in first_pid..first_pid + count {
            let name = format!("proc{pid}");
            let arg = format!("/usr/bin/{name}");
            self.insert(pid, parent_pid, &name, &[arg.as_str()]);
        }
        self
    }

    pub fn vanished(mut self, pid: u32) -> Self {
        self.vanished.insert(pid);
        self
    }

    pub fn exited(mut self, pid: u32) -> Self {
        self.exited.insert(pid);
        self
    }

    pub fn insert(&mut self, pid: u32, parent_pid: Option<u32>, name: &str, command_line: &[&str]) {
        self.processes.insert(
            pid,
            ProcessRecord {
                pid,
                parent_pid,
                name: name.to_string(),
                command_line: command_line.iter().map(|s| s.to_string()).collect(),
            },
        );
    }

    pub fn remove(&mut self, pid: u32) {
        self.processes.remove(&pid);
    }
}

impl ProcessSource for MockSource {
    fn list_pids(&mut self) -> Vec<u32> {
        self.processes.keys().copied().collect()
    }

    fn open(&mut self, pid: u32) -> ProcessResult<ProcessRecord> {
        if self.vanished.contains(&pid) {
            return Err(ProcessError::NotFound { pid });
        }
        self.processes
            .get(&pid)
            .cloned()
            .ok_or(ProcessError::NotFound { pid })
    }

    fn is_running(&mut self, pid: u32) -> bool {
        self.processes.contains_key(&pid)
            && !self.exited.contains(&pid)
            && !self.vanished.contains(&pid)
    }
}
