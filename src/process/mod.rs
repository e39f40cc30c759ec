//! Process token functionality for Windows
//!
//! This module provides the privilege reducer and the token operations
//! it is built on.

pub mod privileges;

pub use privileges::{PrivilegeReducer, TokenApi};
#[cfg(windows)]
pub use privileges::{remove_privileges, WindowsTokenApi};
