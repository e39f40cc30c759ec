//! Target process selection

use super::ProcessId;
use std::fmt;

/// Process whose token is being reduced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessRef {
    /// The calling process
    #[default]
    Current,
    /// Another process, looked up by id
    Pid(ProcessId),
}

impl ProcessRef {
    /// Resolve an optional target, falling back to the calling process
    pub fn resolve(process: Option<&ProcessRef>) -> ProcessRef {
        process.copied().unwrap_or_default()
    }

    /// Target chosen by an optional configured pid
    pub fn from_pid(pid: Option<ProcessId>) -> ProcessRef {
        pid.map_or(ProcessRef::Current, ProcessRef::Pid)
    }

    pub fn is_current(&self) -> bool {
        matches!(self, ProcessRef::Current)
    }

    pub fn pid(&self) -> Option<ProcessId> {
        match self {
            ProcessRef::Current => None,
            ProcessRef::Pid(pid) => Some(*pid),
        }
    }
}

impl fmt::Display for ProcessRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessRef::Current => write!(f, "current process"),
            ProcessRef::Pid(pid) => write!(f, "process {}", pid),
        }
    }
}
