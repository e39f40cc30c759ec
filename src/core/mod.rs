//! Core module containing the fundamental types for Privilege-Reducer
//!
//! Provides privilege identifiers, process targets, and the error
//! report produced by a reduction.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    FailureKind, Luid, LuidAndAttributes, ProcessId, ProcessRef, ReductionError, ReductionReport,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
