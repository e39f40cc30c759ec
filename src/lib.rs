//! Privilege-Reducer library for stripping privileges from Windows process tokens
//!
//! The reducer opens a process token, resolves each privilege name and
//! removes it for good, collecting a failure per step instead of stopping.

pub mod config;
pub mod console;
pub mod core;
pub mod logging;
pub mod process;
pub mod report;
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{
    names, FailureKind, Luid, LuidAndAttributes, ProcessId, ProcessRef, ReductionError,
    ReductionReport,
};
pub use crate::process::{PrivilegeReducer, TokenApi};
#[cfg(windows)]
pub use crate::process::{remove_privileges, WindowsTokenApi};
pub use crate::windows::ErrorCode;
