//! Windows API layer for token manipulation
//!
//! Provides safe wrappers around the Win32 token and privilege calls.
//! All unsafe FFI calls are contained within this module. Error code
//! handling is portable so the rest of the crate builds everywhere.

#[cfg(windows)]
pub mod bindings;
#[cfg(windows)]
pub mod types;
pub mod utils;

#[cfg(windows)]
pub use types::Handle;
pub use utils::ErrorCode;

