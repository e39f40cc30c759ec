//! Core type definitions for Privilege-Reducer
//!
//! Privilege identifiers, target selection and the failure report
//! produced by a reduction.

mod error;
mod privilege;
mod process_ref;
mod reduction_report;

// Re-export all public types
pub use error::{FailureKind, ReductionError};
pub use privilege::{names, Luid, LuidAndAttributes, SE_PRIVILEGE_REMOVED, TOKEN_ADJUST_PRIVILEGES};
pub use process_ref::ProcessRef;
pub use reduction_report::ReductionReport;

// Common type aliases
pub type ProcessId = u32;
